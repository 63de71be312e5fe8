use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use contracts::dashboards::content::SupportView;
use leptos::prelude::*;

#[component]
pub fn SupportSection(data: SupportView) -> impl IntoView {
    // Раскрытый вопрос FAQ (индекс)
    let open_faq = RwSignal::new(None::<usize>);

    view! {
        <div class="section section--support">
            <PageHeader title=data.title icon_name="help-circle">
                ""
            </PageHeader>

            <div class="support-channels">
                {data.channels.into_iter().enumerate().map(|(i, c)| view! {
                    <CardAnimated delay_ms=(i as u32) * 80>
                        <div class="support-channel">
                            <div class="support-channel__icon">{icon(c.icon)}</div>
                            <h3>{c.title}</h3>
                            <p>{c.description}</p>
                            <div class="support-channel__contact">{c.contact}</div>
                        </div>
                    </CardAnimated>
                }).collect_view()}
            </div>

            <h2>"Frequently Asked Questions"</h2>
            <div class="faq">
                {data.faqs.into_iter().enumerate().map(|(i, faq)| view! {
                    <div class="faq__item">
                        <div
                            class="faq__question"
                            on:click=move |_| open_faq.update(|o| *o = if *o == Some(i) { None } else { Some(i) })
                        >
                            <span>{faq.question}</span>
                            {move || if open_faq.get() == Some(i) { icon("chevron-down") } else { icon("chevron-right") }}
                        </div>
                        <Show when=move || open_faq.get() == Some(i)>
                            <div class="faq__answer">{faq.answer}</div>
                        </Show>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
