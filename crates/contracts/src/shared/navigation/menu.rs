//! Role menus as a declarative slot table.
//!
//! Every role shares the same twelve slots. Ten of them are common items;
//! the discount slot and the relationship slot are filled per role.

use crate::enums::{Role, Section};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub section: Section,
    pub label: &'static str,
    /// Icon name understood by the frontend `icon()` helper
    pub icon: &'static str,
}

impl MenuItem {
    const fn new(section: Section, label: &'static str, icon: &'static str) -> Self {
        Self {
            section,
            label,
            icon,
        }
    }

    /// Routing id; the resolver keys off this, never off the label.
    pub fn id(&self) -> &'static str {
        self.section.id()
    }

    pub fn path(&self, role: Role) -> String {
        format!("/{}/{}", role.code(), self.section.path_segment())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuSlot {
    Common(MenuItem),
    Discount,
    Relationship,
}

const DASHBOARD: MenuItem = MenuItem::new(Section::Dashboard, "Dashboard", "box");
const PROFILE: MenuItem = MenuItem::new(Section::Profile, "Profile", "user");
const ORDERS: MenuItem = MenuItem::new(Section::Orders, "Orders", "package");
const PRODUCTS: MenuItem = MenuItem::new(Section::Products, "Product Lists", "file-text");
const SALES: MenuItem = MenuItem::new(Section::Sales, "Sales", "bar-chart");
const MESSAGES: MenuItem = MenuItem::new(Section::Messages, "Messages", "message-square");
const STOCKS: MenuItem = MenuItem::new(Section::Stocks, "Stocks", "box");
const LOGISTICS: MenuItem = MenuItem::new(Section::Logistics, "NexQ Logistics", "truck");
const QR_SCANNER: MenuItem = MenuItem::new(Section::QrScanner, "QR Scanner", "qr-code");
const CUSTOMER_SERVICE: MenuItem =
    MenuItem::new(Section::CustomerService, "Customer Service", "help-circle");

const MENU_LAYOUT: [MenuSlot; 12] = [
    MenuSlot::Common(DASHBOARD),
    MenuSlot::Common(PROFILE),
    MenuSlot::Common(ORDERS),
    MenuSlot::Common(PRODUCTS),
    MenuSlot::Discount,
    MenuSlot::Common(SALES),
    MenuSlot::Common(MESSAGES),
    MenuSlot::Relationship,
    MenuSlot::Common(STOCKS),
    MenuSlot::Common(LOGISTICS),
    MenuSlot::Common(QR_SCANNER),
    MenuSlot::Common(CUSTOMER_SERVICE),
];

/// Role-specific discount entry. Always routes to `discounts`.
pub fn discount_item(role: Role) -> MenuItem {
    let label = match role {
        Role::Manufacturer => "Discount Impact",
        Role::Distributor => "Discount Tracker",
        Role::Wholesaler => "Bulk Discounts",
        Role::Retailer => "Discounts Available",
    };
    MenuItem::new(Section::Discounts, label, "dollar-sign")
}

/// Role-specific counterparty entry: retailers buy from suppliers,
/// everybody else sells to buyers.
pub fn relationship_item(role: Role) -> MenuItem {
    match role {
        Role::Retailer => MenuItem::new(Section::Suppliers, "Suppliers", "users"),
        _ => MenuItem::new(Section::Buyers, "Buyers", "users"),
    }
}

/// Ordered sidebar menu for `role`.
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MENU_LAYOUT
        .iter()
        .map(|slot| match slot {
            MenuSlot::Common(item) => *item,
            MenuSlot::Discount => discount_item(role),
            MenuSlot::Relationship => relationship_item(role),
        })
        .collect()
}

pub fn menu_contains(role: Role, section: Section) -> bool {
    section == Section::Dashboard || menu_for(role).iter().any(|item| item.section == section)
}

/// Looks up a menu entry by routing id.
pub fn find_item(role: Role, id: &str) -> Option<MenuItem> {
    menu_for(role).into_iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position_of(role: Role, section: Section) -> Vec<usize> {
        menu_for(role)
            .iter()
            .enumerate()
            .filter(|(_, item)| item.section == section)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_role_specific_items_share_positions() {
        for role in Role::all() {
            assert_eq!(position_of(role, Section::Discounts), vec![4], "{role}");

            let relationship: Vec<_> = menu_for(role)
                .iter()
                .enumerate()
                .filter(|(_, item)| matches!(item.section, Section::Buyers | Section::Suppliers))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(relationship, vec![7], "{role}");
        }
    }

    #[test]
    fn test_common_sequence() {
        let ids: Vec<_> = menu_for(Role::Distributor).iter().map(|i| i.id()).collect();
        assert_eq!(
            ids,
            vec![
                "dashboard",
                "profile",
                "orders",
                "products",
                "discounts",
                "sales",
                "messages",
                "buyers",
                "stocks",
                "logistics",
                "qr-scanner",
                "customer-service",
            ]
        );
    }

    #[test]
    fn test_discount_labels() {
        let labels: Vec<_> = Role::all().iter().map(|r| discount_item(*r).label).collect();
        assert_eq!(
            labels,
            vec![
                "Discount Impact",
                "Discount Tracker",
                "Bulk Discounts",
                "Discounts Available"
            ]
        );
    }

    #[test]
    fn test_retailer_suppliers_has_own_id() {
        let item = relationship_item(Role::Retailer);
        assert_eq!(item.label, "Suppliers");
        assert_eq!(item.id(), "suppliers");
        assert!(find_item(Role::Retailer, "buyers").is_none());
        assert!(find_item(Role::Wholesaler, "suppliers").is_none());
    }

    #[test]
    fn test_paths() {
        let qr = find_item(Role::Manufacturer, "qr-scanner").unwrap();
        assert_eq!(qr.path(Role::Manufacturer), "/manufacturer/qr");
        let home = find_item(Role::Retailer, "dashboard").unwrap();
        assert_eq!(home.path(Role::Retailer), "/retailer/dashboard");
    }

    #[test]
    fn test_every_menu_is_unique_and_has_dashboard() {
        for role in Role::all() {
            let menu = menu_for(role);
            assert_eq!(menu.len(), 12);
            assert!(menu_contains(role, Section::Dashboard));
            let mut ids: Vec<_> = menu.iter().map(|i| i.id()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 12);
        }
    }
}
