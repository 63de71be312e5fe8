use crate::shared::storage::LocalStorageStore;
use contracts::enums::{Role, Section};
use contracts::shared::async_action::{ActionKind, SimulatedAction};
use contracts::shared::config::DashboardConfig;
use contracts::shared::navigation::{NavigationMachine, NavigationState};
use contracts::shared::onboarding::Onboarding;
use contracts::shared::route::Route;
use leptos::ev;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query-string part of the app URL (`?order=ORD-456`, `?mode=register`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl PageQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn order(order_id: &str) -> Self {
        Self {
            order: Some(order_id.to_string()),
            ..Self::default()
        }
    }

    pub fn mode(mode: &str) -> Self {
        Self {
            mode: Some(mode.to_string()),
            ..Self::default()
        }
    }
}

/// Path plus query, ready for `history.pushState`.
pub fn build_url(route: Route, query: &PageQuery) -> String {
    let qs = serde_qs::to_string(query).unwrap_or_default();
    if qs.is_empty() {
        route.to_path()
    } else {
        format!("{}?{}", route.to_path(), qs)
    }
}

/// Keeps the current machine when the role is unchanged, otherwise starts a
/// new one at the requested section.
fn machine_for(current: Option<NavigationMachine>, role: Role, section: Section) -> NavigationMachine {
    match current {
        Some(mut machine) if machine.role() == role => {
            if let Err(e) = machine.select_section(section) {
                log::warn!("{}", e);
            }
            machine
        }
        _ => NavigationMachine::starting_at(role, section).unwrap_or_else(|e| {
            log::warn!("{}, starting at dashboard", e);
            NavigationMachine::new(role)
        }),
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub nav: RwSignal<Option<NavigationMachine>>,
    pub query: RwSignal<PageQuery>,
    pub signed_in: RwSignal<Option<Role>>,
    pub config: StoredValue<DashboardConfig>,
    pub onboarding: StoredValue<Onboarding<LocalStorageStore>, LocalStorage>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        let onboarding =
            Onboarding::with_suffix(LocalStorageStore::new(), &config.storage.visited_suffix);
        Self {
            route: RwSignal::new(Route::Landing),
            nav: RwSignal::new(None),
            query: RwSignal::new(PageQuery::default()),
            signed_in: RwSignal::new(None),
            config: StoredValue::new(config),
            onboarding: StoredValue::new_local(onboarding),
        }
    }

    /// Reads the initial route from the address bar and follows back/forward.
    pub fn init_router_integration(&self) {
        self.sync_from_location();

        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            leptos::logging::log!("🔙 popstate");
            this.sync_from_location();
        });
        on_cleanup(move || handle.remove());
    }

    fn sync_from_location(&self) {
        let Some(location) = window().map(|w| w.location()) else {
            return;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        self.apply(Route::from_path(&path), PageQuery::parse(&search));
    }

    fn apply(&self, route: Route, query: PageQuery) {
        leptos::logging::log!("🧭 route: {}", route);
        match route {
            Route::Dashboard { role, section } => {
                let machine = machine_for(self.nav.get_untracked(), role, section);
                self.nav.set(Some(machine));
            }
            _ => self.nav.set(None),
        }
        self.query.set(query);
        self.route.set(route);
    }

    fn push_history(&self, url: &str) {
        let current = window()
            .and_then(|w| {
                let l = w.location();
                Some(format!("{}{}", l.pathname().ok()?, l.search().ok()?))
            })
            .unwrap_or_default();
        if current == url {
            return;
        }
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }

    pub fn navigate_with(&self, route: Route, query: PageQuery) {
        self.push_history(&build_url(route, &query));
        self.apply(route, query);
    }

    pub fn navigate(&self, route: Route) {
        self.navigate_with(route, PageQuery::default());
    }

    pub fn nav_state(&self) -> Option<NavigationState> {
        self.nav.with(|nav| nav.as_ref().map(|m| m.state()))
    }

    /// Menu click. Ids outside the role's menu are refused and logged,
    /// the view stays put.
    pub fn select_section(&self, section_id: &str) -> Option<Section> {
        self.select_with(section_id, PageQuery::default())
    }

    fn select_with(&self, section_id: &str, query: PageQuery) -> Option<Section> {
        let mut machine = self.nav.get_untracked()?;
        let section = match machine.select(section_id) {
            Ok(section) => section,
            Err(e) => {
                log::warn!("{}", e);
                return None;
            }
        };
        let route = Route::Dashboard {
            role: machine.role(),
            section,
        };
        self.nav.set(Some(machine));
        self.push_history(&build_url(route, &query));
        self.query.set(query);
        self.route.set(route);
        Some(section)
    }

    /// "Book Delivery": opens logistics with the order preselected.
    pub fn book_delivery(&self, order_id: &str) -> Option<Section> {
        leptos::logging::log!("🚚 book delivery for {}", order_id);
        self.select_with(Section::Logistics.id(), PageQuery::order(order_id))
    }

    pub fn toggle_sidebar(&self) {
        self.nav.update(|nav| {
            if let Some(m) = nav {
                m.toggle_sidebar();
            }
        });
    }

    pub fn toggle_mobile_overlay(&self) {
        self.nav.update(|nav| {
            if let Some(m) = nav {
                m.toggle_mobile_overlay();
            }
        });
    }

    pub fn close_mobile_overlay(&self) {
        let open = self
            .nav
            .with_untracked(|nav| nav.is_some_and(|m| m.state().mobile_overlay_open));
        if open {
            self.nav.update(|nav| {
                if let Some(m) = nav {
                    m.close_mobile_overlay();
                }
            });
        }
    }

    pub fn sign_in(&self, role: Role) {
        self.signed_in.set(Some(role));
        self.navigate(Route::dashboard(role));
    }

    pub fn logout(&self) {
        self.signed_in.set(None);
        self.navigate(Route::Landing);
    }

    /// Delay and canned result for a simulated action, from config.
    pub fn action(&self, kind: ActionKind) -> SimulatedAction {
        self.config.with_value(|c| c.action(kind))
    }

    pub fn should_show_welcome(&self, role: Role) -> bool {
        self.onboarding
            .try_with_value(|o| o.should_show_welcome(role))
            .unwrap_or(false)
    }

    pub fn dismiss_welcome(&self, role: Role) {
        self.onboarding.with_value(|o| o.dismiss(role));
    }
}

pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse() {
        assert_eq!(PageQuery::parse(""), PageQuery::default());
        assert_eq!(PageQuery::parse("?order=ORD-456"), PageQuery::order("ORD-456"));
        assert_eq!(PageQuery::parse("mode=register").mode.as_deref(), Some("register"));
    }

    #[test]
    fn test_build_url() {
        let route = Route::Dashboard {
            role: Role::Distributor,
            section: Section::Logistics,
        };
        assert_eq!(build_url(route, &PageQuery::default()), "/distributor/logistics");
        assert_eq!(
            build_url(route, &PageQuery::order("ORD-456")),
            "/distributor/logistics?order=ORD-456"
        );
        assert_eq!(build_url(Route::Profile, &PageQuery::mode("login")), "/profile?mode=login");
    }

    #[test]
    fn test_machine_for_keeps_sidebar_state_within_role() {
        let mut machine = NavigationMachine::new(Role::Retailer);
        machine.toggle_sidebar();
        let next = machine_for(Some(machine), Role::Retailer, Section::Suppliers);
        assert_eq!(next.active_section(), Section::Suppliers);
        assert!(!next.state().sidebar_expanded);

        let other = machine_for(Some(next), Role::Distributor, Section::Discounts);
        assert_eq!(other.role(), Role::Distributor);
        assert_eq!(other.active_section(), Section::Discounts);
        assert!(other.state().sidebar_expanded);
    }

    #[test]
    fn test_machine_for_rejected_section() {
        let next = machine_for(None, Role::Retailer, Section::Buyers);
        assert_eq!(next.active_section(), Section::Dashboard);
    }
}
