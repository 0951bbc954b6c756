//! Wizard step 1: pick orders, vehicle and driver, record the load.

#[cfg(test)]
#[path = "wizard_load_step_test.rs"]
mod wizard_load_step_test;

use leptos::prelude::*;

use crate::net::types::{Driver, Order, Vehicle};
use crate::state::wizard::DeliverySession;

/// Parse a numeric form field, treating blanks and junk as zero.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Option value -> selection, where the placeholder option is `""`.
pub fn selection_from_value(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

#[component]
pub fn WizardLoadStep(
    session: RwSignal<DeliverySession>,
    #[prop(into)] orders: Signal<Vec<Order>>,
    #[prop(into)] vehicles: Signal<Vec<Vehicle>>,
    #[prop(into)] drivers: Signal<Vec<Driver>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <section class="wizard-step wizard-step--load">
            <h2>"Load vehicle"</h2>
            <Show when=move || loading.get()>
                <p class="wizard-step__hint">"Loading orders, vehicles and drivers..."</p>
            </Show>

            <fieldset class="wizard-step__orders">
                <legend>"Orders"</legend>
                <Show when=move || !loading.get() && orders.get().is_empty()>
                    <p class="wizard-step__hint">"No open orders."</p>
                </Show>
                {move || {
                    orders
                        .get()
                        .into_iter()
                        .map(|order| {
                            let id = order.id.clone();
                            let checked_id = id.clone();
                            view! {
                                <label class="wizard-step__order">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || session.get().is_order_selected(&checked_id)
                                        on:change=move |_| {
                                            session.update(|s| {
                                                s.toggle_order(&id);
                                            });
                                        }
                                    />
                                    <span>{order.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </fieldset>

            <label class="form-field">
                <span>"Vehicle"</span>
                <select
                    prop:value=move || session.get().vehicle_id.unwrap_or_default()
                    on:change=move |ev| {
                        let value = selection_from_value(event_target_value(&ev));
                        session.update(|s| {
                            s.set_vehicle(value);
                        });
                    }
                >
                    <option value="">"Select a vehicle"</option>
                    {move || {
                        vehicles
                            .get()
                            .into_iter()
                            .map(|v| {
                                let label = match v.capacity {
                                    Some(capacity) => format!("{} ({capacity} cyl)", v.registration_number),
                                    None => v.registration_number.clone(),
                                };
                                view! { <option value=v.id>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="form-field">
                <span>"Driver"</span>
                <select
                    prop:value=move || session.get().driver_id.unwrap_or_default()
                    on:change=move |ev| {
                        let value = selection_from_value(event_target_value(&ev));
                        session.update(|s| {
                            s.set_driver(value);
                        });
                    }
                >
                    <option value="">"Select a driver"</option>
                    {move || {
                        drivers
                            .get()
                            .into_iter()
                            .map(|d| view! { <option value=d.id>{d.name}</option> })
                            .collect_view()
                    }}
                </select>
            </label>

            <label class="form-field">
                <span>"Cylinders loaded"</span>
                <input
                    type="number"
                    min="0"
                    prop:value=move || session.get().load.cylinders_loaded.to_string()
                    on:input=move |ev| {
                        let count = parse_count(&event_target_value(&ev));
                        session.update(|s| s.load.cylinders_loaded = count);
                    }
                />
            </label>

            <label class="form-field">
                <span>"Notes"</span>
                <textarea
                    prop:value=move || session.get().load.notes
                    on:input=move |ev| {
                        let notes = event_target_value(&ev);
                        session.update(|s| s.load.notes = notes);
                    }
                ></textarea>
            </label>
        </section>
    }
}
