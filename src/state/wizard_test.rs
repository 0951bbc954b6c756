use super::*;

// =============================================================
// Helpers
// =============================================================

fn ready_to_load() -> DeliverySession {
    let mut session = DeliverySession::default();
    session.toggle_order("o-1");
    session.set_vehicle(Some("v-1".to_owned()));
    session.set_driver(Some("d-1".to_owned()));
    session
}

fn at_confirm() -> DeliverySession {
    let mut session = ready_to_load();
    assert_eq!(session.next(), StepOutcome::Moved(WizardStep::Deliver));
    session.delivery.delivered = true;
    assert_eq!(session.next(), StepOutcome::Moved(WizardStep::Confirm));
    session
}

// =============================================================
// WizardStep
// =============================================================

#[test]
fn step_numbers_are_one_based() {
    let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn step_chain_is_linear() {
    assert_eq!(WizardStep::Load.next(), Some(WizardStep::Deliver));
    assert_eq!(WizardStep::Deliver.next(), Some(WizardStep::Confirm));
    assert_eq!(WizardStep::Confirm.next(), None);
    assert_eq!(WizardStep::Load.prev(), None);
    assert_eq!(WizardStep::Confirm.prev(), Some(WizardStep::Deliver));
}

#[test]
fn default_session_starts_at_load() {
    let session = DeliverySession::default();
    assert_eq!(session.current_step, WizardStep::Load);
    assert!(session.selected_orders.is_empty());
    assert!(!session.can_go_back());
}

// =============================================================
// Step 1 guard
// =============================================================

#[test]
fn load_step_requires_orders_vehicle_and_driver() {
    let mut session = DeliverySession::default();
    assert_eq!(session.next(), StepOutcome::Blocked);
    assert_eq!(session.blocked_reason(), Some("Select at least one order."));

    session.toggle_order("o-1");
    assert_eq!(session.blocked_reason(), Some("Select a vehicle."));
    assert_eq!(session.next(), StepOutcome::Blocked);

    session.set_vehicle(Some("v-1".to_owned()));
    assert_eq!(session.blocked_reason(), Some("Select a driver."));
    assert_eq!(session.next(), StepOutcome::Blocked);

    session.set_driver(Some("d-1".to_owned()));
    assert!(session.can_go_next());
    assert_eq!(session.next(), StepOutcome::Moved(WizardStep::Deliver));
}

#[test]
fn blocked_next_leaves_session_unchanged() {
    let mut session = DeliverySession::default();
    session.toggle_order("o-1");
    let before = session.clone();
    assert_eq!(session.next(), StepOutcome::Blocked);
    assert_eq!(session, before);
}

#[test]
fn toggle_order_adds_and_removes() {
    let mut session = DeliverySession::default();
    session.toggle_order("o-1");
    session.toggle_order("o-2");
    assert_eq!(session.selected_orders, vec!["o-1".to_owned(), "o-2".to_owned()]);
    session.toggle_order("o-1");
    assert_eq!(session.selected_orders, vec!["o-2".to_owned()]);
    assert!(!session.is_order_selected("o-1"));
    assert!(session.is_order_selected("o-2"));
}

#[test]
fn empty_vehicle_or_driver_id_counts_as_unselected() {
    let mut session = DeliverySession::default();
    session.toggle_order("o-1");
    session.set_vehicle(Some(String::new()));
    session.set_driver(Some("d-1".to_owned()));
    assert_eq!(session.vehicle_id, None);
    assert!(!session.can_go_next());
}

#[test]
fn selection_is_locked_after_step_one() {
    let mut session = ready_to_load();
    session.next();
    assert!(!session.toggle_order("o-2"));
    assert!(!session.set_vehicle(None));
    assert!(!session.set_driver(None));
    assert_eq!(session.selected_orders, vec!["o-1".to_owned()]);
    assert_eq!(session.vehicle_id.as_deref(), Some("v-1"));
}

// =============================================================
// Step 2 and 3 guards
// =============================================================

#[test]
fn deliver_step_requires_delivered_flag() {
    let mut session = ready_to_load();
    session.next();
    assert_eq!(session.next(), StepOutcome::Blocked);
    assert_eq!(session.current_step, WizardStep::Deliver);
    session.delivery.delivered = true;
    assert_eq!(session.next(), StepOutcome::Moved(WizardStep::Confirm));
}

#[test]
fn confirm_step_requires_confirmed_flag() {
    let mut session = at_confirm();
    assert_eq!(session.next(), StepOutcome::Blocked);
    assert_eq!(session.blocked_reason(), Some("Confirm the delivery."));
    assert_eq!(session.current_step, WizardStep::Confirm);
}

#[test]
fn completing_returns_summary_and_resets() {
    let mut session = at_confirm();
    session.load.cylinders_loaded = 20;
    session.delivery.empties_collected = 8;
    session.confirmation.confirmed = true;
    session.confirmation.receiver_name = "Store manager".to_owned();

    let StepOutcome::Completed(done) = session.next() else {
        panic!("expected completion");
    };
    assert_eq!(done.order_ids, vec!["o-1".to_owned()]);
    assert_eq!(done.vehicle_id, "v-1");
    assert_eq!(done.driver_id, "d-1");
    assert_eq!(done.load.cylinders_loaded, 20);
    assert_eq!(done.delivery.empties_collected, 8);
    assert_eq!(done.confirmation.receiver_name, "Store manager");
    assert_eq!(session, DeliverySession::default());
}

// =============================================================
// Back and reset
// =============================================================

#[test]
fn back_is_noop_at_step_one() {
    let mut session = ready_to_load();
    assert!(!session.back());
    assert_eq!(session.current_step, WizardStep::Load);
}

#[test]
fn back_is_unconditional_after_step_one() {
    let mut session = at_confirm();
    session.delivery.delivered = false;
    assert!(session.back());
    assert_eq!(session.current_step, WizardStep::Deliver);
    assert!(session.back());
    assert_eq!(session.current_step, WizardStep::Load);
    assert_eq!(session.selected_orders, vec!["o-1".to_owned()]);
}

#[test]
fn reset_discards_all_data() {
    let mut session = at_confirm();
    session.confirmation.receiver_name = "x".to_owned();
    session.reset();
    assert_eq!(session, DeliverySession::default());
}
