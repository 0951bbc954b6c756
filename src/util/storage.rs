//! Bearer-token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state the console persists. It is read on every
//! request, written on login/signup, and removed on logout or a failed
//! profile check.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (private mode, quota) are logged and otherwise ignored:
//! the user simply stays signed out after a reload. Native builds keep the token in a
//! thread-local slot so auth flows stay testable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "csr")]
use crate::config::TOKEN_STORAGE_KEY;

#[cfg(not(feature = "csr"))]
thread_local! {
    static TOKEN_SLOT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token; empty values count as absent.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    let raw = local_storage().and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
    #[cfg(not(feature = "csr"))]
    let raw = TOKEN_SLOT.with(|slot| slot.borrow().clone());

    raw.filter(|t| !t.trim().is_empty())
}

/// Persist `token`, replacing any previous one.
pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("could not persist auth token");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    TOKEN_SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
}

/// Remove the stored token, if any.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                log::warn!("could not remove auth token");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    TOKEN_SLOT.with(|slot| *slot.borrow_mut() = None);
}
