use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header of a dashboard section: icon, title, optional subtitle and actions.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    icon_name: Option<String>,

    #[prop(optional, into)]
    subtitle: Option<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <div class="page-header__icon">{icon(&name)}</div> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
