use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::storage::config_override;
use crate::shared::toast::{ToastHost, ToastService};
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

fn app_config() -> DashboardConfig {
    let override_toml = config_override();
    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("config override rejected: {:#}", e);
            load_config(None).expect("embedded config must parse")
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let toast_ttl = config.timings.toast_ttl_ms;

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    // Toasts are fire-and-forget, any component may push one.
    provide_context(ToastService::new(toast_ttl));

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
