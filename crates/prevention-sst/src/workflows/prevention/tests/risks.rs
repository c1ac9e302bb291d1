use crate::workflows::prevention::risks::{identify_risks_by_scian, measures_for_risks};

#[test]
fn scian_code_risks_come_before_sector_risks() {
    let risks = identify_risks_by_scian(Some("2361"), Some("construction"));

    assert_eq!(risks[0], "Chutes de hauteur (toitures r\u{e9}sidentielles)");
    let code_end = risks
        .iter()
        .position(|risk| *risk == "Chutes de hauteur")
        .expect("sector risk present");
    assert!(code_end >= 4, "code-specific risks precede sector risks");
}

#[test]
fn duplicate_risks_keep_first_occurrence() {
    // 3112 and the manufacturing sector table both carry "Espaces confinés".
    let risks = identify_risks_by_scian(Some("3112"), Some("manufacturier"));

    let occurrences = risks
        .iter()
        .filter(|risk| **risk == "Espaces confin\u{e9}s")
        .count();
    assert_eq!(occurrences, 1);
    assert!(
        risks.iter().position(|risk| *risk == "Espaces confin\u{e9}s").expect("present") < 3,
        "the deduplicated entry keeps its code-specific position"
    );
}

#[test]
fn unknown_sector_falls_back_to_default_profile() {
    let risks = identify_risks_by_scian(None, Some("apiculture"));

    assert_eq!(risks[0], "Incendies et explosions");
    assert!(risks.contains(&"\u{c9}vacuation d'urgence"));
}

#[test]
fn missing_sector_resolves_to_default_profile() {
    assert_eq!(
        identify_risks_by_scian(None, None),
        identify_risks_by_scian(None, Some("default")),
    );
    assert_eq!(
        identify_risks_by_scian(None, Some("  ")),
        identify_risks_by_scian(None, None),
    );
}

#[test]
fn sector_lookup_is_case_insensitive() {
    assert_eq!(
        identify_risks_by_scian(None, Some("Construction")),
        identify_risks_by_scian(None, Some("construction")),
    );
}

#[test]
fn unknown_scian_code_contributes_nothing() {
    let with_unknown = identify_risks_by_scian(Some("9999"), Some("transport"));
    let without = identify_risks_by_scian(None, Some("transport"));

    assert_eq!(with_unknown, without);
}

#[test]
fn measures_cover_every_risk_with_generic_fallback() {
    let measures = measures_for_risks(["Chutes de hauteur", "Risque inconnu du catalogue"]);

    assert!(measures.contains(&"Installation de garde-corps conformes"));
    // The unknown risk still yields the generic measure list.
    assert!(measures.contains(&"\u{c9}valuation r\u{e9}guli\u{e8}re des risques"));
}
