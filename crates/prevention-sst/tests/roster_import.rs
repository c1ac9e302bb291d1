use std::io::Cursor;

use chrono::NaiveDate;

use prevention_sst::workflows::roster::{RosterImportError, RosterImporter};

const ROSTER: &str = "\
\u{c9}tablissement,Secteur,Code SCIAN,Effectif,Activit\u{e9}s
Toitures Gagnon,B\u{e2}timent,2361,35,Toitures r\u{e9}sidentielles; Charpente
Acier Lachine,Fabrication,3321,620,
Comptabilit\u{e9} Rive-Sud,Bureau,,8,
";

#[test]
fn roster_rows_become_company_profiles() {
    let profiles = RosterImporter::from_reader(Cursor::new(ROSTER)).expect("import succeeds");

    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].company_name, "Toitures Gagnon");
    assert_eq!(profiles[0].sector, "construction");
    assert_eq!(profiles[0].scian_code.as_deref(), Some("2361"));
    assert_eq!(profiles[0].main_activities.len(), 2);

    assert_eq!(profiles[1].sector, "manufacturier");
    assert_eq!(profiles[1].company_size, 620);

    assert_eq!(profiles[2].sector, "services");
    assert!(profiles[2].scian_code.is_none());
}

#[test]
fn batch_generation_covers_the_whole_roster() {
    let profiles = RosterImporter::from_reader(Cursor::new(ROSTER)).expect("import succeeds");
    let today = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");

    let programs = RosterImporter::generate_programs_on(&profiles, today);

    assert_eq!(programs.len(), 3);
    assert!(programs
        .iter()
        .all(|program| program.sections.len() == 9 && program.generated_date == "2025-10-01"));
    // Committee structure follows each establishment's headcount.
    assert_eq!(programs[0].sections[6].title, "COMIT\u{c9} DE SANT\u{c9} ET S\u{c9}CURIT\u{c9}");
    assert_eq!(programs[2].sections[6].title, "AGENT DE LIAISON SST");
}

#[test]
fn malformed_headcounts_name_the_offending_row() {
    let roster = "\
\u{c9}tablissement,Secteur,Code SCIAN,Effectif,Activit\u{e9}s
Toitures Gagnon,Construction,2361,35,
Acier Lachine,Fabrication,3321,six cents,
";

    let error = RosterImporter::from_reader(Cursor::new(roster)).expect_err("import fails");

    match error {
        RosterImportError::Record { row, message } => {
            assert_eq!(row, 3);
            assert!(message.contains("six cents"));
        }
        other => panic!("expected record error, got {other}"),
    }
}
