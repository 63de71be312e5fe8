//! CardAnimated: thaw `Card` с анимацией появления (`@keyframes card-appear`).
//!
//! Для каскада задаётся `delay_ms`: 0, 80, 160...

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

pub fn stagger_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=stagger_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

/// Clickable feature tile (landing page and dashboard home).
#[component]
pub fn FeatureCard<F>(
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    #[prop(optional)]
    delay_ms: u32,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="feature-card" on:click=move |_| on_click()>
            <CardAnimated delay_ms=delay_ms>
                <div class="feature-card__icon">{icon(&icon_name)}</div>
                <h3 class="feature-card__title">{title}</h3>
                <p class="feature-card__description">{description}</p>
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_style() {
        assert_eq!(
            stagger_style(80, ""),
            "animation: card-appear 0.28s ease-out 80ms both;"
        );
        assert!(stagger_style(0, "max-width: 400px;").ends_with("both; max-width: 400px;"));
    }
}
