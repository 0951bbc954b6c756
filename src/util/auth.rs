//! Session lifecycle and route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into here instead of talking to `net::api` directly for auth,
//! so token storage, `AuthState` updates and toasts stay consistent across
//! login, signup, logout and the startup profile check.
//!
//! ERROR HANDLING
//! ==============
//! Login and signup failures raise an error toast and are returned to the
//! caller. A failed profile check clears the token silently; expiry and
//! network outage are treated the same.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{AuthResponse, LoginRequest, SignupRequest, User};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::storage;
use crate::util::toast::{notify_error, notify_info, notify_success};

/// Redirect decision for protected routes: only once loading has settled.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect decision for `/login` and `/signup` when already signed in.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a signed-in user lands on a public route.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Persist the token from a login/signup response and sign the user in.
pub fn apply_auth_response(state: &mut AuthState, response: AuthResponse) -> User {
    storage::save_token(&response.token);
    state.sign_in(response.user.clone());
    response.user
}

/// Settle the startup profile check for `checked_token`; an error drops it.
///
/// A login or signup that finished while the check was in flight wins: the
/// result only ends `loading` and leaves the newer session untouched.
pub fn apply_profile_result(
    state: &mut AuthState,
    checked_token: &str,
    result: Result<User, ApiError>,
) {
    let superseded = state.user.is_some() || storage::load_token().as_deref() != Some(checked_token);
    if superseded {
        log::debug!("profile check outdated by a newer session");
        state.loading = false;
        return;
    }
    match result {
        Ok(user) => state.finish_check(Some(user)),
        Err(e) => {
            log::info!("stored session rejected: {e}");
            storage::clear_token();
            state.finish_check(None);
        }
    }
}

/// Run the startup profile check if a token is stored.
pub fn bootstrap_session(auth: RwSignal<AuthState>) {
    let Some(token) = storage::load_token() else {
        auth.update(|a| a.finish_check(None));
        return;
    };
    auth.update(|a| a.loading = true);
    leptos::task::spawn_local(async move {
        let result = api::fetch_profile().await;
        auth.update(|a| apply_profile_result(a, &token, result));
    });
}

/// Call `load` once, the first time a signed-in user is present.
///
/// Pages use this for their initial fetches so a signed-out visit only
/// redirects instead of firing requests that are bound to fail.
pub fn install_signed_in_loader<F>(auth: RwSignal<AuthState>, load: F)
where
    F: FnOnce() + 'static,
{
    let mut pending = Some(load);
    Effect::new(move || {
        if let Some(load) = auth.with(|a| take_when_signed_in(a, &mut pending)) {
            load();
        }
    });
}

/// Hand out the pending loader only while a user is signed in, at most once.
pub fn take_when_signed_in<F>(state: &AuthState, pending: &mut Option<F>) -> Option<F> {
    if state.is_authenticated() { pending.take() } else { None }
}

/// Log in and update session state.
///
/// # Errors
///
/// Returns the API failure after raising an error toast.
pub async fn login(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    request: LoginRequest,
) -> Result<User, ApiError> {
    match api::login(&request).await {
        Ok(response) => {
            let mut user = None;
            auth.update(|a| user = Some(apply_auth_response(a, response)));
            let user = user.ok_or(ApiError::MissingData)?;
            notify_success(toasts, format!("Welcome back, {}.", user.name));
            Ok(user)
        }
        Err(e) => {
            notify_error(toasts, e.user_message());
            Err(e)
        }
    }
}

/// Create an account and update session state.
///
/// # Errors
///
/// Returns the API failure after raising an error toast.
pub async fn signup(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    request: SignupRequest,
) -> Result<User, ApiError> {
    match api::signup(&request).await {
        Ok(response) => {
            let mut user = None;
            auth.update(|a| user = Some(apply_auth_response(a, response)));
            let user = user.ok_or(ApiError::MissingData)?;
            notify_success(toasts, format!("Account created. Welcome, {}.", user.name));
            Ok(user)
        }
        Err(e) => {
            notify_error(toasts, e.user_message());
            Err(e)
        }
    }
}

/// Log out locally even if the server call fails.
pub async fn logout(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {e}");
    }
    storage::clear_token();
    auth.update(AuthState::sign_out);
    notify_info(toasts, "Signed out.");
}
