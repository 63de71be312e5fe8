use super::content::ContentView;
use super::fixtures;
use crate::enums::{Role, Section};
use crate::shared::error::{DashboardError, DashboardResult};
use crate::shared::navigation::menu::menu_contains;

/// Strict lookup: the id must name a section in `role`'s menu.
pub fn resolve_checked(role: Role, section_id: &str) -> DashboardResult<ContentView> {
    let unknown = || DashboardError::UnknownSection {
        role,
        section: section_id.to_string(),
    };

    let section = Section::from_id(section_id).ok_or_else(unknown)?;
    if !menu_contains(role, section) {
        return Err(unknown());
    }
    fixtures::view_for(role, section).ok_or_else(unknown)
}

/// Total lookup used by the shell. Anything `resolve_checked` rejects falls
/// back to the role's dashboard home and is logged.
pub fn resolve(role: Role, section_id: &str) -> ContentView {
    match resolve_checked(role, section_id) {
        Ok(view) => view,
        Err(e) => {
            log::warn!("{}; showing the {} dashboard instead", e, role);
            fixtures::home_for(role)
        }
    }
}

/// Same as `resolve` for an already-typed section.
pub fn resolve_section(role: Role, section: Section) -> ContentView {
    resolve(role, section.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::content::{CounterpartyKind, DiscountsView};
    use crate::shared::navigation::menu::menu_for;

    #[test]
    fn test_every_menu_item_resolves() {
        for role in Role::all() {
            for item in menu_for(role) {
                let view = resolve_checked(role, item.id())
                    .unwrap_or_else(|e| panic!("{role}/{}: {e}", item.id()));
                assert_eq!(view.section(), item.section, "{role}/{}", item.id());
            }
        }
    }

    #[test]
    fn test_sections_outside_menu_fall_back_to_home() {
        for role in Role::all() {
            let home = resolve(role, "dashboard");
            for section in Section::all() {
                if !menu_contains(role, section) {
                    assert_eq!(resolve(role, section.id()), home, "{role}/{section}");
                    assert!(resolve_checked(role, section.id()).is_err());
                }
            }
            assert_eq!(resolve(role, "analytics"), home);
            assert_eq!(resolve(role, ""), home);
        }
    }

    #[test]
    fn test_unknown_section_error() {
        assert_eq!(
            resolve_checked(Role::Manufacturer, "suppliers").unwrap_err(),
            DashboardError::UnknownSection {
                role: Role::Manufacturer,
                section: "suppliers".to_string(),
            }
        );
    }

    #[test]
    fn test_distributor_discount_tracker() {
        let ContentView::Discounts(DiscountsView {
            title, discounts, ..
        }) = resolve(Role::Distributor, "discounts")
        else {
            panic!("expected discounts view");
        };
        assert_eq!(title, "Discount Tracker");
        assert_eq!(discounts.len(), 4);
        let first = &discounts[0];
        assert_eq!(first.percent_label(), "10%");
        assert_eq!(first.min_order, 200);
        assert_eq!(first.product, "Smartphone X1");
        assert_eq!(first.counterparty, "ABC Electronics");
        let last = &discounts[3];
        assert_eq!((last.percent, last.min_order, last.product), (12, 300, "Tablet T5"));
    }

    #[test]
    fn test_retailer_suppliers_view() {
        let ContentView::Counterparties(view) = resolve(Role::Retailer, "suppliers") else {
            panic!("expected counterparties view");
        };
        assert_eq!(view.kind, CounterpartyKind::Suppliers);
        assert_eq!(view.top(1)[0].name, "Metro Wholesale Inc.");
    }

    #[test]
    fn test_distributor_fixture_details() {
        let ContentView::Home(home) = resolve(Role::Distributor, "dashboard") else {
            panic!("expected home view");
        };
        assert_eq!(home.greeting, "Hello, Global Distribution Inc.!");
        assert_eq!(home.filter_partners("", "Home Appliances").len(), 1);
        assert_eq!(home.filter_partners("tablets", "").len(), 1);

        let ContentView::Orders(orders) = resolve(Role::Distributor, "orders") else {
            panic!("expected orders view");
        };
        let bookable: Vec<_> = orders
            .orders
            .iter()
            .filter(|o| o.status.can_book_delivery())
            .map(|o| o.id)
            .collect();
        assert_eq!(bookable, vec!["ORD-456"]);

        let ContentView::Stocks(stocks) = resolve(Role::Distributor, "stocks") else {
            panic!("expected stocks view");
        };
        let totals = stocks.totals();
        assert_eq!((totals.total, totals.booked, totals.dispatched), (1800, 400, 230));
        assert_eq!(stocks.rows[0].available(), 750);
    }

    #[test]
    fn test_feature_cards_target_menu_sections() {
        for role in Role::all() {
            let ContentView::Home(home) = resolve(role, "dashboard") else {
                panic!("expected home view");
            };
            for card in home.features {
                assert!(menu_contains(role, card.target), "{role}: {}", card.title);
            }
        }
    }
}
