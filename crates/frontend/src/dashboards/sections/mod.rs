//! Section views. `render_section` resolves (role, section) to its content
//! bundle and picks the matching component.

pub mod counterparties;
pub mod discounts;
pub mod home;
pub mod logistics;
pub mod messages;
pub mod orders;
pub mod profile;
pub mod sales;
pub mod stocks;
pub mod support;

use super::qr_scanner::QrToolsSection;
use contracts::dashboards::{resolve_section, ContentView};
use contracts::enums::{Role, Section};
use leptos::prelude::*;

pub fn render_section(role: Role, section: Section) -> AnyView {
    leptos::logging::log!("📄 render {} / {}", role, section);
    match resolve_section(role, section) {
        ContentView::Home(data) => view! { <home::HomeSection data=data /> }.into_any(),
        ContentView::Profile(data) => view! { <profile::ProfileSection data=data /> }.into_any(),
        ContentView::Products(data) => view! { <profile::ProductsSection data=data /> }.into_any(),
        ContentView::Orders(data) => view! { <orders::OrdersSection data=data /> }.into_any(),
        ContentView::Discounts(data) => {
            view! { <discounts::DiscountsSection data=data /> }.into_any()
        }
        ContentView::Sales(data) => view! { <sales::SalesSection data=data /> }.into_any(),
        ContentView::Messages(data) => view! { <messages::MessagesSection data=data /> }.into_any(),
        ContentView::Counterparties(data) => {
            view! { <counterparties::CounterpartiesSection data=data /> }.into_any()
        }
        ContentView::Stocks(data) => view! { <stocks::StocksSection data=data /> }.into_any(),
        ContentView::Logistics(data) => {
            view! { <logistics::LogisticsSection data=data /> }.into_any()
        }
        ContentView::QrTools(data) => view! { <QrToolsSection data=data /> }.into_any(),
        ContentView::Support(data) => view! { <support::SupportSection data=data /> }.into_any(),
    }
}
