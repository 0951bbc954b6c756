//! Link card used by section catalog pages and the dashboard.

use leptos::prelude::*;

/// A clickable card pointing at a feature route.
#[component]
pub fn CatalogCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <a class="catalog-card" href=href>
            <span class="catalog-card__title">{title}</span>
            <span class="catalog-card__description">{description}</span>
            <span class="catalog-card__cta">"Open →"</span>
        </a>
    }
}
