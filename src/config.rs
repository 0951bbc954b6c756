//! Compile-time configuration for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API origin is baked in at build time from `API_URL`. Everything else
//! here is a fixed constant shared by the network, storage and toast layers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Origin used when `API_URL` is unset or blank at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Resolve a raw origin value, falling back to [`DEFAULT_API_URL`].
pub fn resolve_base_url(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

/// API origin selected at build time.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("API_URL"))
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for an API path such as `/api/auth/login`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}
