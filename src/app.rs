//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    catalog::{CatalogPage, FeaturePage},
    dashboard::DashboardPage,
    delivery::DeliveryPage,
    login::LoginPage,
    master_data::MasterDataRoute,
    signup::SignupPage,
};
use crate::state::{auth::AuthState, nav::NavState, toast::ToastState};
use crate::util::{auth::bootstrap_session, storage};

/// Root application component.
///
/// Provides the auth, navigation and toast contexts, starts the stored-token
/// profile check and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::at_startup(storage::load_token().is_some()));
    let nav = RwSignal::new(NavState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(nav);
    provide_context(toasts);

    bootstrap_session(auth);

    view! {
        <Title text="Cylinder Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>

                <Route path=StaticSegment("inventory") view=|| view! { <CatalogPage section="inventory"/> }/>
                <Route
                    path=(StaticSegment("inventory"), StaticSegment("stock"))
                    view=|| view! { <FeaturePage href="/inventory/stock"/> }
                />
                <Route
                    path=(StaticSegment("inventory"), StaticSegment("tracking"))
                    view=|| view! { <FeaturePage href="/inventory/tracking"/> }
                />

                <Route path=StaticSegment("dispatch") view=|| view! { <CatalogPage section="dispatch"/> }/>
                <Route path=(StaticSegment("dispatch"), StaticSegment("delivery")) view=DeliveryPage/>
                <Route
                    path=(StaticSegment("dispatch"), StaticSegment("notes"))
                    view=|| view! { <FeaturePage href="/dispatch/notes"/> }
                />
                <Route
                    path=(StaticSegment("dispatch"), StaticSegment("gr-approval"))
                    view=|| view! { <FeaturePage href="/dispatch/gr-approval"/> }
                />

                <Route path=StaticSegment("reports") view=|| view! { <CatalogPage section="reports"/> }/>
                <Route
                    path=(StaticSegment("reports"), StaticSegment("inventory"))
                    view=|| view! { <FeaturePage href="/reports/inventory"/> }
                />
                <Route
                    path=(StaticSegment("reports"), StaticSegment("deliveries"))
                    view=|| view! { <FeaturePage href="/reports/deliveries"/> }
                />

                <Route path=StaticSegment("master-data") view=|| view! { <CatalogPage section="master-data"/> }/>
                <Route
                    path=(StaticSegment("master-data"), ParamSegment("resource"))
                    view=MasterDataRoute
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
