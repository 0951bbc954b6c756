//! Collapsible navigation sidebar over the static route tree.
//!
//! ARCHITECTURE
//! ============
//! Rendering reads `NAV_TREE` plus the current location; expansion and
//! collapse live in `NavState` so they survive page changes but not reloads.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::nav::NavState;
use crate::state::toast::ToastState;
use crate::util::nav::{NAV_TREE, NavItem, is_exact_route, is_item_active, is_route_active};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pathname = use_location().pathname;

    let collapsed = move || nav.get().sidebar_collapsed;
    let identity = move || auth.get().identity().unwrap_or_default();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            crate::util::auth::logout(auth, toasts).await;
        });
    };

    view! {
        <nav class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__header">
                <span class="sidebar__brand">"Cylinder Console"</span>
                <button
                    class="sidebar__collapse"
                    title="Toggle sidebar"
                    on:click=move |_| nav.update(NavState::toggle_sidebar)
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
            </div>
            <ul class="sidebar__tree">
                {NAV_TREE
                    .iter()
                    .map(|item| view! { <SidebarEntry item=item pathname=pathname/> })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || identity().0}</span>
                <span class="sidebar__role">{move || identity().1}</span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn SidebarEntry(item: &'static NavItem, pathname: Memo<String>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let active = move || is_item_active(item, &pathname.get());

    if item.children.is_empty() {
        return view! {
            <li class="sidebar__item" class:sidebar__item--active=active>
                <a href=item.href>{item.label}</a>
            </li>
        }
        .into_any();
    }

    let expanded = move || nav.get().is_expanded(item.key);
    view! {
        <li class="sidebar__section" class:sidebar__section--active=active>
            <button
                class="sidebar__section-toggle"
                aria-expanded=move || expanded().to_string()
                on:click=move |_| nav.update(|n| n.toggle_section(item.key))
            >
                <span>{item.label}</span>
                <span class="sidebar__chevron">{move || if expanded() { "▾" } else { "▸" }}</span>
            </button>
            <Show when=expanded>
                <ul class="sidebar__children">
                    <li
                        class="sidebar__item"
                        class:sidebar__item--active=move || is_exact_route(item.href, &pathname.get())
                    >
                        <a href=item.href>"Overview"</a>
                    </li>
                    {item
                        .children
                        .iter()
                        .map(|child| {
                            view! {
                                <li
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || {
                                        is_route_active(child.href, &pathname.get())
                                    }
                                >
                                    <a href=child.href>{child.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_any()
}
