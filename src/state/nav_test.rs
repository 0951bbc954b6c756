use super::*;

#[test]
fn nav_state_default_open_with_nothing_expanded() {
    let state = NavState::default();
    assert!(!state.sidebar_collapsed);
    assert!(state.expanded.is_empty());
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = NavState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}

#[test]
fn toggle_section_flips_membership() {
    let mut state = NavState::default();
    state.toggle_section("reports");
    assert!(state.is_expanded("reports"));
    state.toggle_section("reports");
    assert!(!state.is_expanded("reports"));
}

#[test]
fn expand_for_path_opens_active_section_once() {
    let mut state = NavState::default();
    assert!(state.expand_for_path("/dispatch/delivery"));
    assert!(state.is_expanded("dispatch"));
    assert!(!state.expand_for_path("/dispatch/notes"));
}

#[test]
fn expand_for_path_keeps_manual_expansions() {
    let mut state = NavState::default();
    state.toggle_section("reports");
    state.expand_for_path("/inventory/stock");
    assert!(state.is_expanded("reports"));
    assert!(state.is_expanded("inventory"));
}

#[test]
fn expand_for_dashboard_changes_nothing() {
    let mut state = NavState::default();
    assert!(!state.expand_for_path("/"));
    assert!(state.expanded.is_empty());
}
