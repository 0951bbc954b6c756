//! Sidebar chrome state (collapse and expanded sections).
//!
//! DESIGN
//! ======
//! Kept in memory only; a reload starts with the sidebar open and only the
//! active section expanded.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::BTreeSet;

use crate::util::nav::active_sections;

#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub sidebar_collapsed: bool,
    pub expanded: BTreeSet<String>,
}

impl NavState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn toggle_section(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_owned());
        }
    }

    /// Expand sections containing `path`; returns whether anything changed.
    pub fn expand_for_path(&mut self, path: &str) -> bool {
        let mut changed = false;
        for key in active_sections(path) {
            changed |= self.expanded.insert(key.to_owned());
        }
        changed
    }
}
