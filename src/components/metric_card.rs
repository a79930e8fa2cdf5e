//! Metric Card Component
//!
//! A titled number with an icon, used for the stat rows on each page.

use leptos::prelude::*;

#[component]
pub fn MetricCard(
    #[prop(into)] title: String,
    /// Already formatted value
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    /// Accent class: primary, success, warning, destructive
    #[prop(default = "primary")] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="card metric-card">
            <div class=format!("metric-icon tone-{}", tone)>{icon}</div>
            <div class="metric-body">
                <p class="metric-title">{title}</p>
                <p class="metric-value">{move || value.get()}</p>
            </div>
        </div>
    }
}
