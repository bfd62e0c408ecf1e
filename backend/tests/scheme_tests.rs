//! Scheme catalogue filtering tests
//!
//! The filter is a documented best-effort keyword match over unstructured
//! text; these tests pin the inclusion rules rather than full relevance.

use agri_server::services::SchemeCatalog;
use shared::Scheme;

fn scheme(title: &str, description: &str) -> Scheme {
    Scheme {
        title: title.to_string(),
        description: description.to_string(),
        eligibility: "All farmers".to_string(),
        benefits: "Assistance".to_string(),
        link: "https://example.gov.in/".to_string(),
    }
}

#[test]
fn no_filter_returns_the_whole_catalogue_in_order() {
    let catalog = SchemeCatalog::with_default_catalog();
    let all = catalog.filter(None, None);
    assert_eq!(all.len(), catalog.len());
    assert_eq!(all[0].title, "PM-KISAN");
}

#[test]
fn central_schemes_survive_any_state_filter() {
    let catalog = SchemeCatalog::with_default_catalog();
    for state in ["Andhra Pradesh", "Kerala", "West Bengal", "Sikkim"] {
        let titles: Vec<String> = catalog
            .filter(Some(state), None)
            .into_iter()
            .map(|s| s.title)
            .collect();
        for central in ["PM-KISAN", "PMFBY", "SMAM", "PKVY", "NFSM"] {
            assert!(
                titles.contains(&central.to_string()),
                "central scheme {} missing for state {}",
                central,
                state
            );
        }
    }
}

#[test]
fn state_schemes_match_via_aliases() {
    let catalog = SchemeCatalog::with_default_catalog();

    let ap = catalog.filter(Some("Andhra Pradesh"), None);
    assert!(ap.iter().any(|s| s.title == "YSR Rythu Bharosa"));
    assert!(ap.iter().any(|s| s.title == "AP Input Subsidy Scheme"));

    let wb = catalog.filter(Some("West Bengal"), None);
    assert!(wb.iter().any(|s| s.title == "Krishak Bandhu Scheme"));
}

#[test]
fn schemes_for_other_states_are_excluded_by_name_match() {
    let catalog = SchemeCatalog::new(vec![
        scheme("Bihar Diesel Subsidy Scheme", "Subsidy for irrigation using diesel pumps."),
        scheme("Kerala Subhiksha Keralam", "State food security and farming mission."),
    ]);

    let kerala = catalog.filter(Some("Kerala"), None);
    assert_eq!(kerala.len(), 1);
    assert_eq!(kerala[0].title, "Kerala Subhiksha Keralam");
}

#[test]
fn unknown_state_uses_plain_name_matching() {
    let catalog = SchemeCatalog::with_default_catalog();
    let assam = catalog.filter(Some("Assam"), None);
    assert!(assam.iter().any(|s| s.title.starts_with("Assam")));
    assert!(!assam.iter().any(|s| s.title.starts_with("Bihar")));
}

#[test]
fn crop_filter_is_permissive() {
    let catalog = SchemeCatalog::with_default_catalog();
    let unfiltered = catalog.filter(None, None);
    let with_crop = catalog.filter(None, Some("rice"));
    assert_eq!(unfiltered, with_crop);

    // Crop filtering stays permissive when combined with a state filter
    let state_only = catalog.filter(Some("Kerala"), None);
    let state_and_crop = catalog.filter(Some("Kerala"), Some("coconut"));
    assert_eq!(state_only, state_and_crop);
}

#[test]
fn filtered_results_preserve_catalogue_order() {
    let catalog = SchemeCatalog::with_default_catalog();
    let filtered = catalog.filter(Some("Madhya Pradesh"), None);
    let all = catalog.filter(None, None);

    let positions: Vec<usize> = filtered
        .iter()
        .map(|s| all.iter().position(|a| a == s).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
