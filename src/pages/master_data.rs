//! Master-data listing pages: customers, vehicles, drivers, rate contracts.
//!
//! DESIGN
//! ======
//! Each resource maps onto one list endpoint and a fixed column set. Records
//! are flattened into `TableRow`s right after decoding so the view and the
//! client-side search only deal with strings.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch leaves the table empty, shows the error inline and raises
//! an error toast. There is no retry beyond reloading the route.

#[cfg(test)]
#[path = "master_data_test.rs"]
mod master_data_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::app_shell::AppShell;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Customer, Driver, RateContract, Vehicle};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_signed_in_loader;
use crate::util::toast::notify_error;

const MISSING: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasterResource {
    Customers,
    Vehicles,
    Drivers,
    RateContracts,
}

impl MasterResource {
    pub fn title(self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Vehicles => "Vehicles",
            Self::Drivers => "Drivers",
            Self::RateContracts => "Rate Contracts",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Customers => &["Name", "Phone", "City"],
            Self::Vehicles => &["Registration", "Capacity", "Status"],
            Self::Drivers => &["Name", "Phone", "License"],
            Self::RateContracts => &["Customer", "Cylinder type", "Rate", "Valid to"],
        }
    }

    /// Resolve the `<slug>` of a `/master-data/<slug>` route.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim_matches('/') {
            "customers" => Some(Self::Customers),
            "vehicles" => Some(Self::Vehicles),
            "drivers" => Some(Self::Drivers),
            "rate-contracts" => Some(Self::RateContracts),
            _ => None,
        }
    }
}

/// One display row; `cells` lines up with `MasterResource::columns`.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => MISSING.to_owned(),
    }
}

impl From<&Customer> for TableRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            cells: vec![c.name.clone(), cell(c.phone.as_deref()), cell(c.city.as_deref())],
        }
    }
}

impl From<&Vehicle> for TableRow {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id.clone(),
            cells: vec![
                v.registration_number.clone(),
                v.capacity.map_or_else(|| MISSING.to_owned(), |c| c.to_string()),
                cell(v.status.as_deref()),
            ],
        }
    }
}

impl From<&Driver> for TableRow {
    fn from(d: &Driver) -> Self {
        Self {
            id: d.id.clone(),
            cells: vec![d.name.clone(), cell(d.phone.as_deref()), cell(d.license_number.as_deref())],
        }
    }
}

impl From<&RateContract> for TableRow {
    fn from(r: &RateContract) -> Self {
        Self {
            id: r.id.clone(),
            cells: vec![
                cell(r.customer_name.as_deref()),
                cell(r.cylinder_type.as_deref()),
                r.rate.map_or_else(|| MISSING.to_owned(), |rate| format!("{rate:.2}")),
                cell(r.valid_to.as_deref()),
            ],
        }
    }
}

fn to_rows<'a, T: 'a>(items: &'a [T]) -> Vec<TableRow>
where
    TableRow: From<&'a T>,
{
    items.iter().map(TableRow::from).collect()
}

/// Fetch and flatten the records for one resource.
pub async fn load_rows(resource: MasterResource) -> Result<Vec<TableRow>, ApiError> {
    let rows = match resource {
        MasterResource::Customers => to_rows(&api::fetch_customers().await?),
        MasterResource::Vehicles => to_rows(&api::fetch_vehicles().await?),
        MasterResource::Drivers => to_rows(&api::fetch_drivers().await?),
        MasterResource::RateContracts => to_rows(&api::fetch_rate_contracts().await?),
    };
    Ok(rows)
}

/// Rows where any cell contains `query`, case-insensitively. A blank query
/// keeps everything.
pub fn filter_rows(rows: &[TableRow], query: &str) -> Vec<TableRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.cells.iter().any(|c| c.to_lowercase().contains(&needle)))
        .cloned()
        .collect()
}

#[component]
pub fn MasterDataPage(resource: MasterResource) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let rows = RwSignal::new(Vec::<TableRow>::new());
    let loading = RwSignal::new(true);
    let failure = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());

    install_signed_in_loader(auth, move || {
        leptos::task::spawn_local(async move {
            match load_rows(resource).await {
                Ok(loaded) => {
                    log::debug!("loaded {} {} rows", loaded.len(), resource.title());
                    rows.set(loaded);
                }
                Err(e) => {
                    let message = e.user_message();
                    log::warn!("{} fetch failed: {e}", resource.title());
                    notify_error(toasts, format!("Could not load {}: {message}", resource.title()));
                    failure.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    let visible = move || rows.with(|all| filter_rows(all, &query.get()));
    let columns = resource.columns();

    view! {
        <AppShell title=resource.title()>
            <div class="master-data">
                <input
                    class="master-data__search"
                    type="search"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Show when=move || loading.get()>
                    <p class="master-data__hint">"Loading..."</p>
                </Show>
                <Show when=move || failure.get().is_some()>
                    <p class="master-data__error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <table class="master-data__table">
                    <thead>
                        <tr>
                            {columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr data-id=row.id>
                                            {row
                                                .cells
                                                .into_iter()
                                                .map(|c| view! { <td>{c}</td> })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && failure.get().is_none() && visible().is_empty()>
                    <p class="master-data__empty">"No records."</p>
                </Show>
            </div>
        </AppShell>
    }
}

/// `/master-data/:resource` route: picks the table from the path segment.
#[component]
pub fn MasterDataRoute() -> impl IntoView {
    let params = use_params_map();
    let resource = move || {
        params
            .read()
            .get("resource")
            .as_deref()
            .and_then(MasterResource::from_slug)
    };

    move || match resource() {
        Some(resource) => view! { <MasterDataPage resource=resource/> }.into_any(),
        None => "Page not found.".into_any(),
    }
}
