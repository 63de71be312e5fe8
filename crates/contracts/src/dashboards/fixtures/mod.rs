//! Демо-данные для каждой роли. Статичны; ничего не пишется обратно.

mod common;
mod distributor;
mod manufacturer;
mod retailer;
mod wholesaler;

use super::content::ContentView;
use crate::enums::{Role, Section};

/// Fixture view for `(role, section)`, `None` when the role has no such view.
pub(crate) fn view_for(role: Role, section: Section) -> Option<ContentView> {
    match role {
        Role::Manufacturer => manufacturer::view(section),
        Role::Distributor => distributor::view(section),
        Role::Wholesaler => wholesaler::view(section),
        Role::Retailer => retailer::view(section),
    }
}

/// Role dashboard home; always available.
pub(crate) fn home_for(role: Role) -> ContentView {
    ContentView::Home(match role {
        Role::Manufacturer => manufacturer::home(),
        Role::Distributor => distributor::home(),
        Role::Wholesaler => wholesaler::home(),
        Role::Retailer => retailer::home(),
    })
}
