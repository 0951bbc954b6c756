//! Delivery wizard page (Load -> Deliver -> Confirm).
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a fresh `DeliverySession` per mount; leaving the page or reloading
//! discards it. Candidate orders, vehicles and drivers are fetched once a
//! signed-in user is present. Nothing is committed to the server between
//! steps.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::app_shell::AppShell;
use crate::components::step_indicator::StepIndicator;
use crate::components::wizard_confirm_step::WizardConfirmStep;
use crate::components::wizard_deliver_step::WizardDeliverStep;
use crate::components::wizard_load_step::WizardLoadStep;
use crate::net::types::{Driver, Order, Vehicle};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::state::wizard::{CompletedDelivery, DeliverySession, StepOutcome, WizardStep};
use crate::util::auth::install_signed_in_loader;
use crate::util::toast::{notify_error, notify_info, notify_success};

/// Toast text for a finished wizard run.
pub fn completion_message(done: &CompletedDelivery) -> String {
    format!(
        "Delivery confirmed: {} order(s) on vehicle {} with driver {}.",
        done.order_ids.len(),
        done.vehicle_id,
        done.driver_id
    )
}

/// Label for the forward button on a given step.
pub fn next_label(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Load | WizardStep::Deliver => "Next",
        WizardStep::Confirm => "Complete",
    }
}

#[component]
pub fn DeliveryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = RwSignal::new(DeliverySession::default());

    let orders = RwSignal::new(Vec::<Order>::new());
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let drivers = RwSignal::new(Vec::<Driver>::new());
    let loading = RwSignal::new(true);

    install_signed_in_loader(auth, move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_orders().await {
                Ok(items) => orders.set(items),
                Err(e) => notify_error(toasts, format!("Could not load orders: {}", e.user_message())),
            }
            match crate::net::api::fetch_vehicles().await {
                Ok(items) => vehicles.set(items),
                Err(e) => notify_error(toasts, format!("Could not load vehicles: {}", e.user_message())),
            }
            match crate::net::api::fetch_drivers().await {
                Ok(items) => drivers.set(items),
                Err(e) => notify_error(toasts, format!("Could not load drivers: {}", e.user_message())),
            }
            loading.set(false);
        });
    });

    let current_step = Signal::derive(move || session.get().current_step);
    let blocked_reason = move || session.get().blocked_reason();

    let on_next = move |_| {
        let mut outcome = StepOutcome::Blocked;
        session.update(|s| outcome = s.next());
        if let StepOutcome::Completed(done) = outcome {
            log::info!("delivery wizard completed for {} order(s)", done.order_ids.len());
            notify_success(toasts, completion_message(&done));
        }
    };
    let on_back = move |_| {
        session.update(|s| {
            s.back();
        });
    };
    let on_reset = move |_| {
        session.update(DeliverySession::reset);
        notify_info(toasts, "Delivery wizard reset.");
    };

    view! {
        <AppShell title="Delivery Wizard">
            <div class="wizard">
                <StepIndicator current=current_step/>
                {move || match current_step.get() {
                    WizardStep::Load => {
                        view! {
                            <WizardLoadStep
                                session=session
                                orders=orders
                                vehicles=vehicles
                                drivers=drivers
                                loading=loading
                            />
                        }
                            .into_any()
                    }
                    WizardStep::Deliver => view! { <WizardDeliverStep session=session/> }.into_any(),
                    WizardStep::Confirm => view! { <WizardConfirmStep session=session/> }.into_any(),
                }}
                <Show when=move || blocked_reason().is_some()>
                    <p class="wizard__blocked">{move || blocked_reason().unwrap_or_default()}</p>
                </Show>
                <div class="wizard__actions">
                    <button class="btn" on:click=on_reset>
                        "Reset"
                    </button>
                    <button
                        class="btn"
                        disabled=move || !session.get().can_go_back()
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !session.get().can_go_next()
                        on:click=on_next
                    >
                        {move || next_label(current_step.get())}
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
