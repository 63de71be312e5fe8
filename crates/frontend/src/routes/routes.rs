use crate::dashboards::page::DashboardPage;
use crate::layout::global_context::use_app;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::pages::landing::LandingPage;
use crate::pages::profile::ProfilePage;
use contracts::enums::Role;
use contracts::shared::route::Route;
use leptos::prelude::*;

/// Page without the section: changing sections must not remount the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Profile,
    Dashboard(Role),
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Landing => Page::Landing,
            Route::Profile => Page::Profile,
            Route::Dashboard { role, .. } => Page::Dashboard(role),
        }
    }
}

#[component]
fn MainLayout(role: Role) -> impl IntoView {
    view! {
        <Shell
            left=move || view! { <Sidebar role=role /> }.into_any()
            center=move || view! { <DashboardPage role=role /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let page = Memo::new(move |_| Page::from(ctx.route.get()));

    move || match page.get() {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::Dashboard(role) => view! { <MainLayout role=role /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Section;

    #[test]
    fn test_page_ignores_section() {
        let a = Route::Dashboard {
            role: Role::Wholesaler,
            section: Section::Orders,
        };
        let b = Route::dashboard(Role::Wholesaler);
        assert_eq!(Page::from(a), Page::from(b));
        assert_ne!(Page::from(b), Page::from(Route::dashboard(Role::Retailer)));
        assert_eq!(Page::from(Route::Profile), Page::Profile);
    }
}
