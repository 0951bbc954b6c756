use super::*;

#[test]
fn catalog_entries_match_section_children() {
    let hrefs: Vec<&str> = catalog_entries("dispatch").iter().map(|e| e.href).collect();
    assert_eq!(
        hrefs,
        vec!["/dispatch/delivery", "/dispatch/notes", "/dispatch/gr-approval"]
    );
}

#[test]
fn catalog_entries_for_master_data() {
    let labels: Vec<&str> = catalog_entries("master-data").iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Customers", "Vehicles", "Drivers", "Rate Contracts"]);
}

#[test]
fn catalog_entries_unknown_section_is_empty() {
    assert!(catalog_entries("billing").is_empty());
    assert!(catalog_entries("dashboard").is_empty());
}

#[test]
fn section_title_uses_label() {
    assert_eq!(section_title("reports"), "Reports");
    assert_eq!(section_title("nope"), "Not found");
}
