//! Authenticated page frame: sidebar, content area and route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside `AppShell`. The shell redirects to
//! `/login` once the startup profile check has settled without a user and
//! expands the sidebar section that holds the current route.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::nav::NavState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AppShell(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let pathname = use_location().pathname;

    install_unauth_redirect(auth, use_navigate());

    Effect::new(move || {
        let path = pathname.get();
        nav.maybe_update(|n| n.expand_for_path(&path));
    });

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="shell shell--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="shell">
                <Sidebar/>
                <main class="shell__content">
                    <header class="shell__header">
                        <h1>{title.clone()}</h1>
                    </header>
                    {children()}
                </main>
            </div>
        </Show>
    }
}
