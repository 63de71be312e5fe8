use crate::shared::icons::icon;
use contracts::enums::Role;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// First-visit panel. Closing it is remembered per role in localStorage.
#[component]
pub fn WelcomePanel<F>(role: Role, on_dismiss: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    view! {
        <div class="welcome-panel">
            <div class="welcome-panel__icon">{icon("box")}</div>
            <div class="welcome-panel__text">
                <h2>{format!("Welcome to NexQ, {}!", role.company_name())}</h2>
                <p>
                    {format!(
                        "This is your {} dashboard. Use the menu on the left to manage orders, stock, discounts and deliveries.",
                        role.display_name().to_lowercase()
                    )}
                </p>
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_dismiss()>
                "Got it"
            </Button>
        </div>
    }
}
