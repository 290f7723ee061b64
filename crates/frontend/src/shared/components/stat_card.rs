use leptos::prelude::*;

use crate::shared::icons::icon;

/// Headline metric card with a change indicator vs the previous period.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Preformatted value string
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to previous period (omit to hide the indicator)
    #[prop(optional, into)]
    change_percent: MaybeProp<f64>,
    /// Suffix after the percentage, e.g. "vs previous period"
    #[prop(into, optional)]
    change_suffix: Signal<String>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.0 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < 0.0 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}% {}", arrow, pct.abs(), change_suffix.get());
            view! { <span class=cls>{text}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {change_view}
            </div>
        </div>
    }
}
