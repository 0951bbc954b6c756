//! Three-step progress header for the delivery wizard.

#[cfg(test)]
#[path = "step_indicator_test.rs"]
mod step_indicator_test;

use leptos::prelude::*;

use crate::state::wizard::WizardStep;

/// CSS modifier for a step relative to the current one.
pub fn step_status(step: WizardStep, current: WizardStep) -> &'static str {
    match step.cmp(&current) {
        std::cmp::Ordering::Less => "done",
        std::cmp::Ordering::Equal => "current",
        std::cmp::Ordering::Greater => "upcoming",
    }
}

#[component]
pub fn StepIndicator(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    let class = move || format!("step-indicator__step step-indicator__step--{}", step_status(step, current.get()));
                    view! {
                        <li class=class>
                            <span class="step-indicator__number">{step.number()}</span>
                            <span class="step-indicator__title">{step.title()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
