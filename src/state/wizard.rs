//! Delivery wizard session: Load -> Deliver -> Confirm.
//!
//! DESIGN
//! ======
//! The session lives only in memory for the lifetime of the delivery page.
//! Steps are linear with no skipping. Forward moves are guarded per step,
//! backward moves are unconditional, and finishing step 3 hands back a
//! summary and starts a fresh session. Nothing is sent to the server between
//! steps.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// Wizard position. Discriminants are the 1-based step numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Load = 1,
    Deliver = 2,
    Confirm = 3,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Load, Self::Deliver, Self::Confirm];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::Deliver => "Deliver",
            Self::Confirm => "Confirm",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Load => Some(Self::Deliver),
            Self::Deliver => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Load => None,
            Self::Deliver => Some(Self::Load),
            Self::Confirm => Some(Self::Deliver),
        }
    }
}

/// Step 1 details recorded while loading the vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadData {
    pub cylinders_loaded: u32,
    pub notes: String,
}

/// Step 2 details; `delivered` gates the move to confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryData {
    pub delivered: bool,
    pub cylinders_delivered: u32,
    pub empties_collected: u32,
    pub remarks: String,
}

/// Step 3 details; `confirmed` gates completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmationData {
    pub confirmed: bool,
    pub receiver_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliverySession {
    pub current_step: WizardStep,
    /// Selected order ids in selection order, without duplicates.
    pub selected_orders: Vec<String>,
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub load: LoadData,
    pub delivery: DeliveryData,
    pub confirmation: ConfirmationData,
}

/// Everything captured by a finished wizard run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedDelivery {
    pub order_ids: Vec<String>,
    pub vehicle_id: String,
    pub driver_id: String,
    pub load: LoadData,
    pub delivery: DeliveryData,
    pub confirmation: ConfirmationData,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Guard failed; session unchanged.
    Blocked,
    Moved(WizardStep),
    /// Step 3 finished; the session has been reset.
    Completed(CompletedDelivery),
}

impl DeliverySession {
    pub fn is_order_selected(&self, order_id: &str) -> bool {
        self.selected_orders.iter().any(|id| id == order_id)
    }

    /// Add or remove an order. Selections are fixed once past step 1.
    pub fn toggle_order(&mut self, order_id: &str) -> bool {
        if self.current_step != WizardStep::Load {
            return false;
        }
        if let Some(pos) = self.selected_orders.iter().position(|id| id == order_id) {
            self.selected_orders.remove(pos);
        } else {
            self.selected_orders.push(order_id.to_owned());
        }
        true
    }

    pub fn set_vehicle(&mut self, vehicle_id: Option<String>) -> bool {
        if self.current_step != WizardStep::Load {
            return false;
        }
        self.vehicle_id = vehicle_id.filter(|id| !id.is_empty());
        true
    }

    pub fn set_driver(&mut self, driver_id: Option<String>) -> bool {
        if self.current_step != WizardStep::Load {
            return false;
        }
        self.driver_id = driver_id.filter(|id| !id.is_empty());
        true
    }

    /// Why the current step cannot advance, if it cannot.
    pub fn blocked_reason(&self) -> Option<&'static str> {
        match self.current_step {
            WizardStep::Load if self.selected_orders.is_empty() => Some("Select at least one order."),
            WizardStep::Load if self.vehicle_id.is_none() => Some("Select a vehicle."),
            WizardStep::Load if self.driver_id.is_none() => Some("Select a driver."),
            WizardStep::Deliver if !self.delivery.delivered => Some("Mark the delivery as delivered."),
            WizardStep::Confirm if !self.confirmation.confirmed => Some("Confirm the delivery."),
            _ => None,
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.blocked_reason().is_none()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step > WizardStep::Load
    }

    /// Advance one step, or complete from step 3.
    pub fn next(&mut self) -> StepOutcome {
        if !self.can_go_next() {
            return StepOutcome::Blocked;
        }
        if let Some(step) = self.current_step.next() {
            self.current_step = step;
            return StepOutcome::Moved(step);
        }
        let (Some(vehicle_id), Some(driver_id)) = (self.vehicle_id.clone(), self.driver_id.clone()) else {
            return StepOutcome::Blocked;
        };
        let finished = std::mem::take(self);
        StepOutcome::Completed(CompletedDelivery {
            order_ids: finished.selected_orders,
            vehicle_id,
            driver_id,
            load: finished.load,
            delivery: finished.delivery,
            confirmation: finished.confirmation,
        })
    }

    /// Step back; returns false at step 1.
    pub fn back(&mut self) -> bool {
        match self.current_step.prev() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Discard everything and return to step 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
