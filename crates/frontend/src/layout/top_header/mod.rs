//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Brand (click goes to the landing page)
//! - Sidebar toggles, only on dashboard pages
//! - Profile menu

use crate::layout::global_context::{use_app, PageQuery};
use crate::shared::icons::icon;
use contracts::shared::route::Route;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app();
    let menu_open = RwSignal::new(false);

    let on_dashboard = move || ctx.nav_state().is_some();
    let is_sidebar_expanded = move || ctx.nav_state().is_some_and(|s| s.sidebar_expanded);
    let is_overlay_open = move || ctx.nav_state().is_some_and(|s| s.mobile_overlay_open);

    let go = move |route: Route, query: PageQuery| {
        menu_open.set(false);
        ctx.navigate_with(route, query);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand" on:click=move |_| go(Route::Landing, PageQuery::default())>
                {icon("box")}
                <span class="top-header__title">"NexQ"</span>
            </div>

            <div class="top-header__actions">
                <Show when=on_dashboard>
                    // Mobile overlay toggle
                    <button
                        class="top-header__icon-btn top-header__icon-btn--mobile"
                        on:click=move |_| ctx.toggle_mobile_overlay()
                        title="Menu"
                    >
                        {move || if is_overlay_open() { icon("x") } else { icon("menu") }}
                    </button>

                    // Desktop sidebar toggle
                    <button
                        class="top-header__icon-btn top-header__icon-btn--desktop"
                        on:click=move |_| ctx.toggle_sidebar()
                        title=move || if is_sidebar_expanded() { "Collapse sidebar" } else { "Expand sidebar" }
                    >
                        {move || if is_sidebar_expanded() {
                            icon("panel-left-close")
                        } else {
                            icon("panel-left-open")
                        }}
                    </button>

                    <button class="top-header__icon-btn" title="Notifications">
                        {icon("bell")}
                    </button>
                </Show>

                <div class="top-header__user">
                    <button
                        class="top-header__avatar"
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        {icon("user")}
                        <span>
                            {move || ctx.signed_in.get()
                                .map(|role| role.company_name().to_string())
                                .unwrap_or_default()}
                        </span>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="top-header__menu">
                            {move || match ctx.signed_in.get() {
                                Some(role) => view! {
                                    <div class="top-header__menu-item" on:click=move |_| go(Route::dashboard(role), PageQuery::default())>
                                        "Dashboard"
                                    </div>
                                    <div class="top-header__menu-item" on:click=move |_| go(Route::Profile, PageQuery::default())>
                                        "Profile"
                                    </div>
                                    <div class="top-header__menu-item" on:click=move |_| {
                                        menu_open.set(false);
                                        ctx.logout();
                                    }>
                                        "Logout"
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="top-header__menu-item" on:click=move |_| go(Route::Profile, PageQuery::mode("login"))>
                                        "Login"
                                    </div>
                                    <div class="top-header__menu-item" on:click=move |_| go(Route::Profile, PageQuery::mode("register"))>
                                        "Register"
                                    </div>
                                }.into_any(),
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
