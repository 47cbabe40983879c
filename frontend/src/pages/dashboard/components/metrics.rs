use crate::pages::dashboard::utils::MetricCard;
use leptos::*;

#[component]
pub fn MetricsGrid(cards: Vec<MetricCard>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {cards
                .into_iter()
                .map(|card| view! { <Metric card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Metric(card: MetricCard) -> impl IntoView {
    view! {
        <div class=format!(
            "relative overflow-hidden p-6 rounded-2xl bg-surface-elevated shadow {}",
            card.tone.accent_class()
        )>
            <p class="text-3xl font-display font-extrabold text-fg" data-metric=card.label data-value=card.value.clone()>
                {card.value}
            </p>
            <p class="mt-2 text-xs font-bold text-fg-muted uppercase tracking-widest">{card.label}</p>
        </div>
    }
}
