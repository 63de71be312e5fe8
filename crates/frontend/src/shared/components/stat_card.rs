use crate::shared::icons::icon;
use leptos::prelude::*;

/// Tone of the change indicator under the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(percent: f64) -> Self {
        if percent > 0.5 {
            Trend::Up
        } else if percent < -0.5 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Percent change rendered with an arrow, e.g. `↑12.5%`.
pub fn format_change(percent: f64) -> String {
    let arrow = match Trend::of(percent) {
        Trend::Up => "\u{2191}",
        Trend::Down => "\u{2193}",
        Trend::Flat => "",
    };
    format!("{}{:.1}%", arrow, percent.abs())
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Change % relative to previous period
    #[prop(default = None)]
    change_percent: Option<f64>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let change_view = change_percent.map(|pct| {
        let cls = match Trend::of(pct) {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
            Trend::Flat => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=cls>{format_change(pct)}</span> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.5), "\u{2191}12.5%");
        assert_eq!(format_change(-3.0), "\u{2193}3.0%");
        assert_eq!(format_change(0.2), "0.2%");
    }
}
