//! Helpers for raising toasts from anywhere with access to the queue signal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its auto-dismiss.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        ToastKind::Error => log::warn!("toast: {message}"),
        ToastKind::Success | ToastKind::Info => log::info!("toast: {message}"),
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(crate::config::TOAST_DURATION_MS, move || {
        toasts.update(|t| {
            t.dismiss(id);
        });
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}

pub fn notify_info(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Info, message);
}
