use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// Toast payload. Fire-and-forget: nothing waits for it to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }
}

impl From<&crate::shared::error::DashboardError> for Notification {
    fn from(err: &crate::shared::error::DashboardError) -> Self {
        Notification::error("Error", err.to_string())
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::DashboardError;

    #[test]
    fn test_error_toast_from_validation_failure() {
        let err = DashboardError::ValidationFailure {
            form: "registration",
            missing: vec!["terms"],
        };
        let toast = Notification::from(&err);
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "registration: missing required fields: terms");
    }
}
