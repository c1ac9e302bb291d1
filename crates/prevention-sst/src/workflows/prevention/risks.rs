use super::catalog;

/// Derive the applicable risk list for an establishment.
///
/// Code-specific risks come first (most specific), then the sector risks
/// resolved through the lowercase sector key with the `"default"` fallback.
/// The merged list is deduplicated preserving first-seen order. Unknown
/// codes contribute nothing; a missing sector resolves to the default set.
pub fn identify_risks_by_scian(
    scian_code: Option<&str>,
    sector: Option<&str>,
) -> Vec<&'static str> {
    let mut risks: Vec<&'static str> = Vec::new();

    if let Some(code) = scian_code {
        if let Some(specific) = catalog::scian_specific_risks(code.trim()) {
            risks.extend_from_slice(specific);
        }
    }

    let sector_key = sector
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| catalog::DEFAULT_KEY.to_string());

    match catalog::sector_risks(&sector_key) {
        Some(general) => risks.extend_from_slice(general),
        None => risks.extend_from_slice(catalog::default_sector_risks()),
    }

    dedup_preserving_order(risks)
}

/// Flatten the measures for every identified risk, falling back to the
/// generic list per risk. Duplicates across risks are kept on purpose: the
/// same generic measure may legitimately recur under several risks.
pub fn measures_for_risks<'a, I>(risks: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    risks
        .into_iter()
        .flat_map(|risk| catalog::measures_for_risk(risk).iter().copied())
        .collect()
}

fn dedup_preserving_order(risks: Vec<&'static str>) -> Vec<&'static str> {
    let mut seen = Vec::with_capacity(risks.len());
    for risk in risks {
        if !seen.contains(&risk) {
            seen.push(risk);
        }
    }
    seen
}
