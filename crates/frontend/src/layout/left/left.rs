use crate::layout::global_context::use_app;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app();
    let expanded = move || ctx.nav_state().map_or(true, |s| s.sidebar_expanded);
    let overlay_open = move || ctx.nav_state().is_some_and(|s| s.mobile_overlay_open);

    view! {
        <div
            data-zone="left"
            class="left"
            class:left--collapsed=move || !expanded()
            class:left--mobile-open=overlay_open
        >
            {children()}
        </div>
    }
}
