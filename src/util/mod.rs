//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! redirects) and static tables from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod nav;
pub mod storage;
pub mod toast;
