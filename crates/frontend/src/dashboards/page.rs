use super::sections::render_section;
use super::welcome::WelcomePanel;
use crate::layout::global_context::use_app;
use contracts::enums::{Role, Section};
use leptos::prelude::*;

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let ctx = use_app();

    // Memo: the content is rebuilt only when the section actually changes,
    // not on sidebar toggles.
    let section = Memo::new(move |_| {
        ctx.nav_state()
            .map(|s| s.active_section)
            .unwrap_or(Section::Dashboard)
    });

    let show_welcome = RwSignal::new(ctx.should_show_welcome(role));

    view! {
        <div class="dashboard">
            <Show when=move || show_welcome.get()>
                <WelcomePanel
                    role=role
                    on_dismiss=move || {
                        ctx.dismiss_welcome(role);
                        show_welcome.set(false);
                    }
                />
            </Show>
            <div class="dashboard__content">
                {move || render_section(role, section.get())}
            </div>
        </div>
    }
}
