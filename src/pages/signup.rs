//! Account signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::pages::login::looks_like_email;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_authed_redirect;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw signup form fields.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

pub fn validate_signup_input(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let form = RwSignal::new(SignupForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::util::auth::signup(auth, toasts, request).await {
                Ok(_) => navigate("/", leptos_router::NavigateOptions::default()),
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.name = v);
                        }
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.email = v);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.password = v);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || form.get().confirm
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.confirm = v);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
