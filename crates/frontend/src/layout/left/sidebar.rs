//! Sidebar with the role menu.
//!
//! Пункты берутся из `menu_for(role)`; клик выбирает раздел через
//! машину навигации и закрывает мобильный оверлей.

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use contracts::enums::Role;
use contracts::shared::navigation::menu_for;
use leptos::prelude::*;

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let ctx = use_app();
    let active = move || ctx.nav_state().map(|s| s.active_section);
    let expanded = move || ctx.nav_state().map_or(true, |s| s.sidebar_expanded);

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__role">
                <span class="app-sidebar__role-name">{role.display_name()}</span>
                <span class="app-sidebar__company" class:hidden=move || !expanded()>
                    {role.company_name()}
                </span>
            </div>
            {menu_for(role).into_iter().map(|item| {
                let section = item.section;
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || active() == Some(section)
                        title=item.label
                        on:click=move |_| {
                            leptos::logging::log!("📂 menu: {}", item.id());
                            ctx.select_section(item.id());
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span class:hidden=move || !expanded()>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
            <div class="app-sidebar__footer">
                <div class="app-sidebar__item" on:click=move |_| ctx.logout()>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span class:hidden=move || !expanded()>"Logout"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
