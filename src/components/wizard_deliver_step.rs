//! Wizard step 2: record what was delivered and collected.

use leptos::prelude::*;

use crate::components::wizard_load_step::parse_count;
use crate::state::wizard::DeliverySession;

#[component]
pub fn WizardDeliverStep(session: RwSignal<DeliverySession>) -> impl IntoView {
    let loaded = move || session.get().load.cylinders_loaded;

    view! {
        <section class="wizard-step wizard-step--deliver">
            <h2>"Record delivery"</h2>
            <p class="wizard-step__hint">
                {move || format!("{} order(s), {} cylinder(s) loaded.", session.get().selected_orders.len(), loaded())}
            </p>

            <label class="form-field">
                <span>"Cylinders delivered"</span>
                <input
                    type="number"
                    min="0"
                    prop:value=move || session.get().delivery.cylinders_delivered.to_string()
                    on:input=move |ev| {
                        let count = parse_count(&event_target_value(&ev));
                        session.update(|s| s.delivery.cylinders_delivered = count);
                    }
                />
            </label>

            <label class="form-field">
                <span>"Empties collected"</span>
                <input
                    type="number"
                    min="0"
                    prop:value=move || session.get().delivery.empties_collected.to_string()
                    on:input=move |ev| {
                        let count = parse_count(&event_target_value(&ev));
                        session.update(|s| s.delivery.empties_collected = count);
                    }
                />
            </label>

            <label class="form-field">
                <span>"Remarks"</span>
                <textarea
                    prop:value=move || session.get().delivery.remarks
                    on:input=move |ev| {
                        let remarks = event_target_value(&ev);
                        session.update(|s| s.delivery.remarks = remarks);
                    }
                ></textarea>
            </label>

            <label class="form-field form-field--checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || session.get().delivery.delivered
                    on:change=move |ev| {
                        let delivered = event_target_checked(&ev);
                        session.update(|s| s.delivery.delivered = delivered);
                    }
                />
                <span>"Delivered to customer"</span>
            </label>
        </section>
    }
}
