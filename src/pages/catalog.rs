//! Section landing pages and feature placeholders.
//!
//! DESIGN
//! ======
//! Both are derived from `util::nav::NAV_TREE`: a section page shows one
//! card per child route, a feature page shows the label and description of
//! its own entry. Neither fetches data.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::catalog_card::CatalogCard;
use crate::util::nav::{NavItem, find_by_href, find_section};

/// Child entries shown as cards for a section; empty for unknown keys.
pub fn catalog_entries(section_key: &str) -> &'static [NavItem] {
    find_section(section_key)
        .map(|section| section.children)
        .unwrap_or_default()
}

/// Heading for a section page.
pub fn section_title(section_key: &str) -> &'static str {
    find_section(section_key).map_or("Not found", |section| section.label)
}

#[component]
pub fn CatalogPage(section: &'static str) -> impl IntoView {
    let description = find_section(section).map_or("", |s| s.description);

    view! {
        <AppShell title=section_title(section)>
            <p class="catalog-page__intro">{description}</p>
            <div class="catalog-page__cards">
                {catalog_entries(section)
                    .iter()
                    .map(|entry| {
                        view! {
                            <CatalogCard
                                title=entry.label
                                description=entry.description
                                href=entry.href
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </AppShell>
    }
}

#[component]
pub fn FeaturePage(href: &'static str) -> impl IntoView {
    let entry = find_by_href(href);
    let title = entry.map_or("Not found", |e| e.label);
    let description = entry.map_or("", |e| e.description);

    view! {
        <AppShell title=title>
            <div class="feature-page">
                <p class="feature-page__description">{description}</p>
                <p class="feature-page__status">"This view is served by the operations backend."</p>
            </div>
        </AppShell>
    }
}
