use crate::layout::global_context::{use_app, PageQuery};
use crate::layout::top_header::TopHeader;
use crate::shared::components::FeatureCard;
use crate::shared::icons::icon;
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// (icon, title, description)
const FEATURES: [(&str, &str, &str); 6] = [
    ("box", "Real-Time Inventory", "Track stock instantly across multiple warehouses"),
    ("bar-chart", "Dynamic Discounts", "Boost sales with volume-based discount automation"),
    ("qr-code", "QR Scanning", "Simplify inventory management with QR codes"),
    ("bell", "Emergency Delivery", "Urgent delivery when you need it most"),
    ("truck", "Route Optimization", "Save costs with AI-powered logistics routes"),
    ("bar-chart", "Analytics Dashboard", "Gain insights with comprehensive data visualization"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceTab {
    SupplyChain,
    Logistics,
}

struct Service {
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
    icon: &'static str,
    action: &'static str,
}

fn service(tab: ServiceTab) -> Service {
    match tab {
        ServiceTab::SupplyChain => Service {
            title: "Supply Chain Management",
            description: "NexQ provides end-to-end supply chain solutions that connect manufacturers, distributors, wholesalers, and retailers in a seamless ecosystem.",
            points: [
                "Real-time inventory tracking",
                "Dynamic pricing and discounts",
                "Automated order processing",
                "QR code inventory management",
            ],
            icon: "box",
            action: "Get Started",
        },
        ServiceTab::Logistics => Service {
            title: "Smart Logistics Solutions",
            description: "Optimize your delivery operations with NexQ's advanced logistics solutions designed for efficiency and reliability.",
            points: [
                "Route optimization with AI",
                "Same-day and emergency delivery",
                "Real-time shipment tracking",
                "Cost-effective transportation",
            ],
            icon: "truck",
            action: "Learn More",
        },
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app();
    let tab = RwSignal::new(ServiceTab::SupplyChain);
    let get_started = move || ctx.navigate_with(Route::Profile, PageQuery::default());

    let scroll_to_features = move |_| {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("features"))
        {
            el.scroll_into_view();
        }
    };

    view! {
        <div class="landing">
            <TopHeader />

            <section class="landing__hero">
                <h1>"Welcome to " <span class="gradient-text">"NexQ"</span></h1>
                <h2>"Supply Chain 2.0"</h2>
                <p>
                    "Streamline your supply chain with real-time inventory, dynamic discounts, and smart logistics. "
                    "NexQ connects Manufacturers, Distributors, Wholesalers, and Retailers."
                </p>
                <div class="landing__hero-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| get_started()>
                        "Get Started"
                        {icon("chevron-right")}
                    </Button>
                    <Button on_click=scroll_to_features>"Learn More"</Button>
                </div>
            </section>

            <section id="features" class="landing__features">
                <h2>"Our " <span class="gradient-text">"Features"</span></h2>
                <p>"Transform your supply chain with our comprehensive suite of tools designed for Indian SMEs."</p>
                <div class="feature-grid">
                    {FEATURES.into_iter().enumerate().map(|(i, (icon_name, title, description))| view! {
                        <FeatureCard
                            icon_name=icon_name
                            title=title
                            description=description
                            delay_ms=(i as u32) * 80
                            on_click=get_started
                        />
                    }).collect_view()}
                </div>
            </section>

            <section class="landing__services">
                <h2>"Our " <span class="gradient-text">"Services"</span></h2>
                <p>"Comprehensive services tailored to meet the needs of your business."</p>
                <div class="tabs">
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == ServiceTab::SupplyChain
                        on:click=move |_| tab.set(ServiceTab::SupplyChain)
                    >
                        "Supply Chain"
                    </button>
                    <button
                        class="tabs__trigger"
                        class:tabs__trigger--active=move || tab.get() == ServiceTab::Logistics
                        on:click=move |_| tab.set(ServiceTab::Logistics)
                    >
                        "Logistics"
                    </button>
                </div>
                {move || {
                    let s = service(tab.get());
                    view! {
                        <div class="tabs__content">
                            <div class="tabs__text">
                                <h3>{s.title}</h3>
                                <p>{s.description}</p>
                                <ul>
                                    {s.points.into_iter().map(|p| view! { <li>"✓ " {p}</li> }).collect_view()}
                                </ul>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| get_started()>
                                    {s.action}
                                </Button>
                            </div>
                            <div class="tabs__illustration">{icon(s.icon)}</div>
                        </div>
                    }
                }}
            </section>

            <footer class="landing__footer">
                <div class="landing__footer-links">
                    <a href="#">"About Us"</a>
                    <a href="#">"Contact"</a>
                    <a href="#">"Terms"</a>
                </div>
                <div class="landing__copyright">"© 2025 NexQ. All rights reserved."</div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_features() {
        assert_eq!(FEATURES.len(), 6);
        let titles: Vec<_> = FEATURES.iter().map(|f| f.1).collect();
        assert!(titles.contains(&"QR Scanning"));
    }

    #[test]
    fn test_service_tabs() {
        assert_eq!(service(ServiceTab::SupplyChain).action, "Get Started");
        assert_eq!(service(ServiceTab::Logistics).icon, "truck");
    }
}
