use crate::enums::Role;
use thiserror::Error;

/// Ошибки ядра дашборда. Ни одна не фатальна: все обрабатываются на уровне UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("action already in flight for widget '{widget}'")]
    AlreadyInFlight { widget: String },

    #[error("section '{section}' is not part of the {role} menu")]
    UnknownSection { role: Role, section: String },

    #[error("{form}: missing required fields: {}", .missing.join(", "))]
    ValidationFailure {
        form: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DashboardError::UnknownSection {
            role: Role::Retailer,
            section: "buyers".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "section 'buyers' is not part of the retailer menu"
        );

        let err = DashboardError::ValidationFailure {
            form: "login",
            missing: vec!["email", "password"],
        };
        assert_eq!(err.to_string(), "login: missing required fields: email, password");
    }
}
