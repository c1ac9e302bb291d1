use crate::workflows::prevention::actions::{
    fuzzy_sector_match, get_scian_actions, prioritize_scian_actions, SizeTier,
};

#[test]
fn size_tiers_classify_at_the_regulatory_thresholds() {
    assert_eq!(SizeTier::classify(None), SizeTier::Micro);
    assert_eq!(SizeTier::classify(Some(0)), SizeTier::Micro);
    assert_eq!(SizeTier::classify(Some(19)), SizeTier::Micro);
    assert_eq!(SizeTier::classify(Some(20)), SizeTier::Small);
    assert_eq!(SizeTier::classify(Some(99)), SizeTier::Small);
    assert_eq!(SizeTier::classify(Some(100)), SizeTier::Medium);
    assert_eq!(SizeTier::classify(Some(499)), SizeTier::Medium);
    assert_eq!(SizeTier::classify(Some(500)), SizeTier::Large);
}

#[test]
fn fuzzy_sector_match_works_in_both_directions() {
    assert!(fuzzy_sector_match("construction", "Construction"));
    assert!(fuzzy_sector_match("manufacturier", "Fabrication et manufacturier"));
    assert!(fuzzy_sector_match("Fabrication et manufacturier qu\u{e9}b\u{e9}cois", "Fabrication et manufacturier"));
    assert!(!fuzzy_sector_match("construction", "Transport et entreposage"));
}

#[test]
fn small_companies_only_receive_risk_identification_actions() {
    let actions = get_scian_actions(Some("construction"), Some(35));

    assert!(!actions.is_empty());
    assert!(actions
        .iter()
        .all(|action| action.program_category.contains("Identification des risques")));
}

#[test]
fn medium_companies_add_risk_control_actions() {
    let actions = get_scian_actions(Some("construction"), Some(150));

    assert!(actions
        .iter()
        .any(|action| action.program_category.contains("Contr\u{f4}le du risque")));
    assert!(actions.iter().all(|action| {
        action.program_category.contains("Contr\u{f4}le du risque")
            || action.program_category.contains("Identification des risques")
    }));
}

#[test]
fn large_companies_receive_the_full_sector_catalog() {
    let small = get_scian_actions(Some("manufacturier"), Some(35));
    let large = get_scian_actions(Some("manufacturier"), Some(620));

    assert!(large.len() > small.len());
    assert!(large
        .iter()
        .any(|action| action.program_category.contains("Hygi\u{e8}ne du travail")));
}

#[test]
fn missing_sector_applies_no_sector_filter() {
    let actions = get_scian_actions(None, Some(620));

    assert!(actions
        .iter()
        .any(|action| action.sector_category == "Tous secteurs"));
    assert!(actions
        .iter()
        .any(|action| action.sector_category == "Construction"));
}

#[test]
fn prioritization_ranks_severe_risks_first() {
    let actions = prioritize_scian_actions(
        get_scian_actions(Some("manufacturier"), Some(620)),
        Some("manufacturier"),
        Some(620),
    );

    let ids: Vec<&str> = actions.iter().map(|action| action.id).collect();
    // Crushing and asphyxiation score 15, noise 13, chemicals 8.
    assert_eq!(
        ids,
        vec![
            "manuf-cadenassage",
            "manuf-espaces-clos",
            "manuf-bruit-mesurage",
            "manuf-simdut",
        ]
    );
}

#[test]
fn tied_scores_keep_catalog_order() {
    let actions = prioritize_scian_actions(
        get_scian_actions(Some("construction"), Some(150)),
        Some("construction"),
        Some(150),
    );

    // Every construction action carries a high-severity keyword plus the
    // sector bonus, so the ranking must reproduce catalog order.
    let ids: Vec<&str> = actions.iter().map(|action| action.id).collect();
    assert_eq!(
        ids,
        vec![
            "const-chutes-inventaire",
            "const-chutes-protection",
            "const-electrisation",
            "const-ecrasement-excavation",
        ]
    );
}

#[test]
fn hygiene_bonus_only_applies_to_large_companies() {
    let medium = prioritize_scian_actions(
        get_scian_actions(Some("manufacturier"), Some(620)),
        Some("manufacturier"),
        Some(150),
    );
    let large = prioritize_scian_actions(
        get_scian_actions(Some("manufacturier"), Some(620)),
        Some("manufacturier"),
        Some(620),
    );

    // Without the large-company bonus the noise action (medium keyword only)
    // still outranks the chemical action, but both drop below 13 points.
    assert_eq!(medium.len(), large.len());
    let medium_ids: Vec<&str> = medium.iter().map(|action| action.id).collect();
    assert_eq!(
        medium_ids,
        vec![
            "manuf-cadenassage",
            "manuf-espaces-clos",
            "manuf-bruit-mesurage",
            "manuf-simdut",
        ]
    );
}

#[test]
fn fall_risks_outrank_otherwise_equal_actions() {
    let actions = prioritize_scian_actions(
        get_scian_actions(Some("restauration"), Some(10)),
        Some("restauration"),
        Some(10),
    );

    // The floor-fall action follows the burn action in the catalog but its
    // risk label carries the "chute" keyword, so it must come out first.
    assert_eq!(actions[0].id, "resto-chutes-plancher");
    assert_eq!(actions[1].id, "resto-brulures");
}

#[test]
fn selection_is_deterministic() {
    let first = get_scian_actions(Some("transport"), Some(120));
    let second = get_scian_actions(Some("transport"), Some(120));

    assert_eq!(first, second);
}
