use crate::layout::global_context::use_app;
use crate::shared::components::{FeatureCard, PageHeader};
use crate::shared::icons::icon;
use contracts::dashboards::content::{HomeView, PartnerCard};
use leptos::prelude::*;
use thaw::{Input, Select};

#[component]
pub fn HomeSection(data: HomeView) -> impl IntoView {
    let ctx = use_app();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let features = data.features.clone();
    let categories = data.categories.clone();
    let search_title = data.search_title;
    let search_placeholder = data.search_placeholder;
    let partners_title = data.partners_title;
    let subtitle = format!("{} dashboard", data.role.display_name());
    let greeting = data.greeting.clone();
    let home = StoredValue::new(data);

    let partners = move || -> Vec<PartnerCard> {
        home.with_value(|h| {
            h.filter_partners(&query.get(), &category.get())
                .into_iter()
                .cloned()
                .collect()
        })
    };

    view! {
        <div class="section section--home">
            <PageHeader title=greeting icon_name="box" subtitle=subtitle>
                ""
            </PageHeader>

            <div class="home-search">
                <h2 class="home-search__title">{search_title}</h2>
                <div class="home-search__controls">
                    <div class="home-search__input">
                        {icon("search")}
                        <Input value=query placeholder=search_placeholder />
                    </div>
                    <Select value=category>
                        <option value="">"All categories"</option>
                        {categories.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                    </Select>
                </div>
            </div>

            <div class="home-partners">
                <h2>{partners_title}</h2>
                {move || {
                    let list = partners();
                    if list.is_empty() {
                        view! { <p class="empty">"Nothing matches your search"</p> }.into_any()
                    } else {
                        view! {
                            <div class="partner-grid">
                                {list.into_iter().map(|p| view! {
                                    <div class="partner-card">
                                        <div class="partner-card__name">{p.name}</div>
                                        <div class="partner-card__category">{p.category}</div>
                                        <div class="partner-card__detail">{p.detail}</div>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <div class="feature-grid">
                {features.into_iter().enumerate().map(|(i, f)| {
                    let target = f.target;
                    view! {
                        <FeatureCard
                            icon_name=f.icon
                            title=f.title
                            description=f.description
                            delay_ms=(i as u32) * 80
                            on_click=move || {
                                ctx.select_section(target.id());
                            }
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
