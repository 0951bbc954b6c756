use super::*;

#[test]
fn next_label_switches_on_last_step() {
    assert_eq!(next_label(WizardStep::Load), "Next");
    assert_eq!(next_label(WizardStep::Deliver), "Next");
    assert_eq!(next_label(WizardStep::Confirm), "Complete");
}

#[test]
fn completion_message_summarizes_trip() {
    let done = CompletedDelivery {
        order_ids: vec!["o-1".to_owned(), "o-2".to_owned()],
        vehicle_id: "v-9".to_owned(),
        driver_id: "d-3".to_owned(),
        load: Default::default(),
        delivery: Default::default(),
        confirmation: Default::default(),
    };
    assert_eq!(
        completion_message(&done),
        "Delivery confirmed: 2 order(s) on vehicle v-9 with driver d-3."
    );
}
