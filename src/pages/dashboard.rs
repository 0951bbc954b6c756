//! Dashboard: authenticated landing route with shortcuts into each section.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::catalog_card::CatalogCard;
use crate::state::auth::AuthState;
use crate::util::nav::NAV_TREE;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Signed in as {} ({})", u.name, u.role))
            .unwrap_or_default()
    };

    view! {
        <AppShell title="Dashboard">
            <p class="dashboard-page__greeting">{greeting}</p>
            <div class="dashboard-page__cards">
                <CatalogCard
                    title="New Delivery"
                    description="Start the Load → Deliver → Confirm wizard."
                    href="/dispatch/delivery"
                />
                {NAV_TREE
                    .iter()
                    .filter(|item| !item.children.is_empty())
                    .map(|item| {
                        view! {
                            <CatalogCard title=item.label description=item.description href=item.href/>
                        }
                    })
                    .collect_view()}
            </div>
        </AppShell>
    }
}
