pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_app;
use leptos::prelude::*;
use top_header::TopHeader;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
///
/// On small screens the sidebar is an overlay with a backdrop; a click on the
/// backdrop closes it.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_app();
    let overlay_open = move || ctx.nav_state().is_some_and(|s| s.mobile_overlay_open);

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <Show when=overlay_open>
                    <div class="app-backdrop" on:click=move |_| ctx.close_mobile_overlay()></div>
                </Show>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
