use super::*;

#[test]
fn step_status_relative_to_current() {
    assert_eq!(step_status(WizardStep::Load, WizardStep::Deliver), "done");
    assert_eq!(step_status(WizardStep::Deliver, WizardStep::Deliver), "current");
    assert_eq!(step_status(WizardStep::Confirm, WizardStep::Deliver), "upcoming");
}
