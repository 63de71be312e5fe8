use serde::{Deserialize, Serialize};
use std::fmt;

/// Участник цепочки поставок, для которого строится дашборд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manufacturer,
    Distributor,
    Wholesaler,
    Retailer,
}

impl Role {
    /// Код роли, используется в URL и ключах хранилища
    pub fn code(&self) -> &'static str {
        match self {
            Role::Manufacturer => "manufacturer",
            Role::Distributor => "distributor",
            Role::Wholesaler => "wholesaler",
            Role::Retailer => "retailer",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Manufacturer => "Manufacturer",
            Role::Distributor => "Distributor",
            Role::Wholesaler => "Wholesaler",
            Role::Retailer => "Retailer",
        }
    }

    /// Demo company shown in the header, sidebar and greeting.
    pub fn company_name(&self) -> &'static str {
        match self {
            Role::Manufacturer => "Tech Manufacturing Ltd.",
            Role::Distributor => "Global Distribution Inc.",
            Role::Wholesaler => "Metro Wholesale Inc.",
            Role::Retailer => "City Electronics Store",
        }
    }

    /// Все роли в порядке отображения в выборе роли
    pub fn all() -> [Role; 4] {
        [
            Role::Manufacturer,
            Role::Distributor,
            Role::Wholesaler,
            Role::Retailer,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "manufacturer" => Some(Role::Manufacturer),
            "distributor" => Some(Role::Distributor),
            "wholesaler" => Some(Role::Wholesaler),
            "retailer" => Some(Role::Retailer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_all_roles() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Role::from_code("Distributor"), None);
        assert_eq!(Role::from_code(""), None);
    }
}
