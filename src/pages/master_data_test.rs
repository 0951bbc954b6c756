use super::*;

fn row(id: &str, cells: &[&str]) -> TableRow {
    TableRow {
        id: id.to_owned(),
        cells: cells.iter().map(|c| (*c).to_owned()).collect(),
    }
}

// =============================================================================
// MasterResource
// =============================================================================

#[test]
fn from_slug_maps_every_master_route() {
    assert_eq!(MasterResource::from_slug("customers"), Some(MasterResource::Customers));
    assert_eq!(MasterResource::from_slug("vehicles/"), Some(MasterResource::Vehicles));
    assert_eq!(MasterResource::from_slug("drivers"), Some(MasterResource::Drivers));
    assert_eq!(MasterResource::from_slug("rate-contracts"), Some(MasterResource::RateContracts));
    assert_eq!(MasterResource::from_slug("depots"), None);
}

#[test]
fn every_master_data_nav_entry_has_a_table() {
    for item in crate::pages::catalog::catalog_entries("master-data") {
        let slug = item.href.trim_start_matches("/master-data/");
        let resource = MasterResource::from_slug(slug).expect("table for nav entry");
        assert_eq!(resource.title(), item.label);
    }
}

#[test]
fn titles_match_navigation_labels() {
    for (href, resource) in [
        ("/master-data/customers", MasterResource::Customers),
        ("/master-data/rate-contracts", MasterResource::RateContracts),
    ] {
        let item = crate::util::nav::find_by_href(href).expect("nav entry");
        assert_eq!(item.label, resource.title());
    }
}

// =============================================================================
// Row conversion
// =============================================================================

#[test]
fn customer_row_fills_missing_cells() {
    let customer = Customer {
        id: "7".to_owned(),
        name: "Acme Gases".to_owned(),
        phone: Some("  ".to_owned()),
        city: None,
    };
    let r = TableRow::from(&customer);
    assert_eq!(r, row("7", &["Acme Gases", "-", "-"]));
    assert_eq!(r.cells.len(), MasterResource::Customers.columns().len());
}

#[test]
fn rate_contract_row_formats_rate() {
    let contract = RateContract {
        id: "rc-1".to_owned(),
        customer_name: Some("Acme Gases".to_owned()),
        cylinder_type: Some("LPG 14.2kg".to_owned()),
        rate: Some(950.5),
        valid_to: None,
    };
    assert_eq!(
        TableRow::from(&contract),
        row("rc-1", &["Acme Gases", "LPG 14.2kg", "950.50", "-"])
    );
}

#[test]
fn vehicle_row_prints_capacity() {
    let vehicle = Vehicle {
        id: "v1".to_owned(),
        registration_number: "MH12AB1234".to_owned(),
        capacity: Some(120),
        status: Some("active".to_owned()),
    };
    assert_eq!(TableRow::from(&vehicle), row("v1", &["MH12AB1234", "120", "active"]));
}

// =============================================================================
// filter_rows
// =============================================================================

#[test]
fn filter_rows_blank_query_keeps_all() {
    let rows = vec![row("1", &["Acme", "Pune"]), row("2", &["Zen", "Delhi"])];
    assert_eq!(filter_rows(&rows, "   "), rows);
}

#[test]
fn filter_rows_is_case_insensitive_over_all_cells() {
    let rows = vec![row("1", &["Acme", "Pune"]), row("2", &["Zen", "Delhi"])];
    assert_eq!(filter_rows(&rows, "PUN"), vec![row("1", &["Acme", "Pune"])]);
    assert_eq!(filter_rows(&rows, "zen"), vec![row("2", &["Zen", "Delhi"])]);
    assert!(filter_rows(&rows, "mumbai").is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_rows_native_build_reports_unavailable() {
    let result = futures::executor::block_on(load_rows(MasterResource::Drivers));
    assert_eq!(result, Err(ApiError::Unavailable));
}
