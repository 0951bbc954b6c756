//! Signed-in user and startup-check status.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup profile check is in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state at app mount: loading only if a token awaits a check.
    pub fn at_startup(has_token: bool) -> Self {
        Self { user: None, loading: has_token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Settle the startup profile check.
    pub fn finish_check(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Replace the current user after login or signup.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Name and role shown in the navigation shell.
    pub fn identity(&self) -> Option<(String, String)> {
        self.user.as_ref().map(|u| (u.name.clone(), u.role.clone()))
    }
}
