//! Wizard step 3: review the trip and confirm receipt.

#[cfg(test)]
#[path = "wizard_confirm_step_test.rs"]
mod wizard_confirm_step_test;

use leptos::prelude::*;

use crate::state::wizard::DeliverySession;

/// Plain-text review lines shown before confirmation.
pub fn summary_lines(session: &DeliverySession) -> Vec<String> {
    vec![
        format!("Orders: {}", session.selected_orders.join(", ")),
        format!("Vehicle: {}", session.vehicle_id.as_deref().unwrap_or("-")),
        format!("Driver: {}", session.driver_id.as_deref().unwrap_or("-")),
        format!("Loaded: {}", session.load.cylinders_loaded),
        format!("Delivered: {}", session.delivery.cylinders_delivered),
        format!("Empties collected: {}", session.delivery.empties_collected),
    ]
}

#[component]
pub fn WizardConfirmStep(session: RwSignal<DeliverySession>) -> impl IntoView {
    view! {
        <section class="wizard-step wizard-step--confirm">
            <h2>"Confirm delivery"</h2>
            <ul class="wizard-step__summary">
                {move || {
                    summary_lines(&session.get())
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                }}
            </ul>

            <label class="form-field">
                <span>"Received by"</span>
                <input
                    type="text"
                    prop:value=move || session.get().confirmation.receiver_name
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        session.update(|s| s.confirmation.receiver_name = name);
                    }
                />
            </label>

            <label class="form-field form-field--checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || session.get().confirmation.confirmed
                    on:change=move |ev| {
                        let confirmed = event_target_checked(&ev);
                        session.update(|s| s.confirmation.confirmed = confirmed);
                    }
                />
                <span>"I confirm the delivery details are correct"</span>
            </label>
        </section>
    }
}
