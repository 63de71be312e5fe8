use serde::{Deserialize, Serialize};
use std::fmt;

/// Раздел дашборда. `id()` служит ключом маршрутизации, по нему работает резолвер.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Profile,
    Orders,
    Products,
    Discounts,
    Sales,
    Messages,
    Buyers,
    Suppliers,
    Stocks,
    Logistics,
    QrScanner,
    CustomerService,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Profile => "profile",
            Section::Orders => "orders",
            Section::Products => "products",
            Section::Discounts => "discounts",
            Section::Sales => "sales",
            Section::Messages => "messages",
            Section::Buyers => "buyers",
            Section::Suppliers => "suppliers",
            Section::Stocks => "stocks",
            Section::Logistics => "logistics",
            Section::QrScanner => "qr-scanner",
            Section::CustomerService => "customer-service",
        }
    }

    /// Last URL segment, e.g. `/retailer/qr`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Section::QrScanner => "qr",
            Section::CustomerService => "support",
            other => other.id(),
        }
    }

    pub fn all() -> [Section; 13] {
        [
            Section::Dashboard,
            Section::Profile,
            Section::Orders,
            Section::Products,
            Section::Discounts,
            Section::Sales,
            Section::Messages,
            Section::Buyers,
            Section::Suppliers,
            Section::Stocks,
            Section::Logistics,
            Section::QrScanner,
            Section::CustomerService,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::all().into_iter().find(|s| s.id() == id)
    }

    /// Accepts both the URL segment and the section id.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Section::all()
            .into_iter()
            .find(|s| s.path_segment() == segment)
            .or_else(|| Section::from_id(segment))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = Section::all().iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::all().len());
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(Section::QrScanner.path_segment(), "qr");
        assert_eq!(Section::from_path_segment("qr"), Some(Section::QrScanner));
        assert_eq!(
            Section::from_path_segment("customer-service"),
            Some(Section::CustomerService)
        );
        assert_eq!(Section::from_path_segment("support"), Some(Section::CustomerService));
        assert_eq!(Section::from_path_segment("analytics"), None);
    }
}
