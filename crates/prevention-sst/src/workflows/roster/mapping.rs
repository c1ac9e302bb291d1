use super::normalizer::normalize_label;
use std::collections::HashMap;
use std::sync::OnceLock;

static SECTOR_LABEL_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Maps the free-form sector labels found in employer rosters onto the
/// canonical sector keys used by the risk tables. Labels that do not match
/// are passed through so the lookup can still fall back to its generic
/// profile.
pub(crate) fn sector_key_for_normalized(normalized_label: &str) -> Option<&'static str> {
    sector_label_map().get(normalized_label).copied()
}

fn sector_label_map() -> &'static HashMap<String, &'static str> {
    SECTOR_LABEL_MAP.get_or_init(|| {
        const LABEL_TO_SECTOR: &[(&str, &str)] = &[
            // Construction
            ("Construction", "construction"),
            ("B\u{e2}timent", "construction"),
            ("B\u{e2}timent et travaux publics", "construction"),
            ("Construction r\u{e9}sidentielle", "construction"),
            ("Construction commerciale", "construction"),
            ("Entrepreneur g\u{e9}n\u{e9}ral", "construction"),
            // Fabrication
            ("Manufacturier", "manufacturier"),
            ("Fabrication", "manufacturier"),
            ("Fabrication et manufacturier", "manufacturier"),
            ("Usine", "manufacturier"),
            ("Production industrielle", "manufacturier"),
            ("Transformation alimentaire", "manufacturier"),
            // Transport
            ("Transport", "transport"),
            ("Transport et entreposage", "transport"),
            ("Camionnage", "transport"),
            ("Logistique", "transport"),
            ("Entreposage", "transport"),
            // Services
            ("Services", "services"),
            ("Services professionnels", "services"),
            ("Commerce de d\u{e9}tail", "services"),
            ("Bureau", "services"),
            ("Restauration", "services"),
            ("H\u{e9}bergement", "services"),
            ("Sant\u{e9} et services sociaux", "services"),
        ];

        let mut map = HashMap::with_capacity(LABEL_TO_SECTOR.len());
        for (label, sector) in LABEL_TO_SECTOR {
            map.insert(normalize_label(label), *sector);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(label: &str) -> Option<&'static str> {
    let normalized = normalize_label(label);
    sector_key_for_normalized(&normalized)
}
