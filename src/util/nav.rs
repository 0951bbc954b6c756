//! Static route tree for the navigation shell and catalog pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar, section catalog pages and feature placeholders all read from
//! this one table, so adding a feature route is a single edit here plus a
//! `<Route>` in `app`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One entry of the navigation tree.
#[derive(Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub children: &'static [NavItem],
}

const fn leaf(key: &'static str, label: &'static str, href: &'static str, description: &'static str) -> NavItem {
    NavItem { key, label, href, description, children: &[] }
}

pub static NAV_TREE: &[NavItem] = &[
    leaf("dashboard", "Dashboard", "/", "Overview of today's operations."),
    NavItem {
        key: "inventory",
        label: "Inventory",
        href: "/inventory",
        description: "Cylinder stock and movement tracking.",
        children: &[
            leaf(
                "stock",
                "Stock Overview",
                "/inventory/stock",
                "Filled, empty and in-transit cylinders by location.",
            ),
            leaf(
                "tracking",
                "Cylinder Tracking",
                "/inventory/tracking",
                "Follow individual cylinders across customers and trips.",
            ),
        ],
    },
    NavItem {
        key: "dispatch",
        label: "Dispatch",
        href: "/dispatch",
        description: "Delivery trips, dispatch notes and goods-receipt approval.",
        children: &[
            leaf(
                "delivery",
                "Delivery Wizard",
                "/dispatch/delivery",
                "Load a vehicle, record the delivery and confirm it.",
            ),
            leaf(
                "notes",
                "Dispatch Notes",
                "/dispatch/notes",
                "Delivery transaction documents issued per trip.",
            ),
            leaf(
                "gr-approval",
                "GR Approval",
                "/dispatch/gr-approval",
                "Approve goods receipts to close delivery trips.",
            ),
        ],
    },
    NavItem {
        key: "reports",
        label: "Reports",
        href: "/reports",
        description: "Inventory and delivery reporting.",
        children: &[
            leaf(
                "inventory-report",
                "Inventory Report",
                "/reports/inventory",
                "Stock positions and cylinder movement over time.",
            ),
            leaf(
                "delivery-report",
                "Delivery Report",
                "/reports/deliveries",
                "Completed trips, quantities and returns.",
            ),
        ],
    },
    NavItem {
        key: "master-data",
        label: "Master Data",
        href: "/master-data",
        description: "Customers, vehicles, drivers and rate contracts.",
        children: &[
            leaf("customers", "Customers", "/master-data/customers", "Customer accounts and contacts."),
            leaf("vehicles", "Vehicles", "/master-data/vehicles", "Delivery fleet and capacities."),
            leaf("drivers", "Drivers", "/master-data/drivers", "Drivers and license details."),
            leaf(
                "rate-contracts",
                "Rate Contracts",
                "/master-data/rate-contracts",
                "Per-customer cylinder pricing agreements.",
            ),
        ],
    },
];

/// Whether `href` should be highlighted for the current `path`.
///
/// `/` only matches exactly; other routes also match their sub-paths.
pub fn is_route_active(href: &str, path: &str) -> bool {
    let path = normalize_path(path);
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Exact match after trailing-slash normalization; no descendant paths.
pub fn is_exact_route(href: &str, path: &str) -> bool {
    normalize_path(path) == normalize_path(href)
}

/// An item is active when it or any descendant matches.
pub fn is_item_active(item: &NavItem, path: &str) -> bool {
    is_route_active(item.href, path) || item.children.iter().any(|c| is_item_active(c, path))
}

/// Keys of sections (items with children) containing the active route.
pub fn active_sections(path: &str) -> Vec<&'static str> {
    NAV_TREE
        .iter()
        .filter(|item| !item.children.is_empty() && is_item_active(item, path))
        .map(|item| item.key)
        .collect()
}

/// Top-level item by key.
pub fn find_section(key: &str) -> Option<&'static NavItem> {
    NAV_TREE.iter().find(|item| item.key == key)
}

/// Any item, at any depth, by exact href.
pub fn find_by_href(href: &str) -> Option<&'static NavItem> {
    fn walk(items: &'static [NavItem], href: &str) -> Option<&'static NavItem> {
        items
            .iter()
            .find_map(|item| if item.href == href { Some(item) } else { walk(item.children, href) })
    }
    walk(NAV_TREE, href)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
