//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests and unwraps response envelopes, `types` defines the
//! DTOs shared with the server.

pub mod api;
pub mod types;
