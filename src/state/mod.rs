//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `nav`, `toast`, `wizard`) so each page
//! or component depends on a small focused model. Each model is plain data
//! provided through `RwSignal` context by the root component, except the
//! wizard session which is owned by the delivery page.

pub mod auth;
pub mod nav;
pub mod toast;
pub mod wizard;
