//! Dashboard tile with an icon, a short blurb and one action.

use leptos::prelude::*;

#[component]
pub fn DashboardCard(
    icon: &'static str,
    heading: &'static str,
    blurb: &'static str,
    /// The action element (button or link) rendered at the bottom of the card.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <span class="dashboard-card__icon" aria-hidden="true">{icon}</span>
            <h3 class="dashboard-card__heading">{heading}</h3>
            <p class="dashboard-card__blurb">{blurb}</p>
            <div class="dashboard-card__action">{children()}</div>
        </div>
    }
}
