//! Reusable UI components for the console pages.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context and keep their testable logic
//! in small free functions next to the view code.

pub mod app_shell;
pub mod catalog_card;
pub mod sidebar;
pub mod step_indicator;
pub mod toast_host;
pub mod wizard_confirm_step;
pub mod wizard_deliver_step;
pub mod wizard_load_step;
