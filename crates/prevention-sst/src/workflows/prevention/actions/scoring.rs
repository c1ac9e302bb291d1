use super::super::domain::ScianAction;

const HIGH_SEVERITY_KEYWORDS: [&str; 4] = ["écrasement", "électrocution", "chute", "asphyxie"];
const MEDIUM_SEVERITY_KEYWORDS: [&str; 3] = ["troubles musculo-squelettiques", "fatigue", "bruit"];

const CATEGORY_OCCUPATIONAL_HYGIENE: &str = "Hygiène du travail";
const LARGE_COMPANY_THRESHOLD: u32 = 500;

/// Rank selected actions by descending priority score.
///
/// The sort is stable, so equal scores keep their catalog order; that is the
/// reproducibility guarantee for ties.
pub fn prioritize_scian_actions(
    mut actions: Vec<ScianAction>,
    sector: Option<&str>,
    company_size: Option<u32>,
) -> Vec<ScianAction> {
    actions.sort_by_key(|action| std::cmp::Reverse(priority_score(action, sector, company_size)));
    actions
}

/// Additive heuristic score for one action: keyword severity of the risk
/// label, a large-company bonus for occupational hygiene, and sector
/// affinity.
pub(crate) fn priority_score(
    action: &ScianAction,
    sector: Option<&str>,
    company_size: Option<u32>,
) -> i32 {
    let mut score = 0;
    let risk = action.risk.to_lowercase();

    if HIGH_SEVERITY_KEYWORDS
        .iter()
        .any(|keyword| risk.contains(keyword))
    {
        score += 10;
    }

    if MEDIUM_SEVERITY_KEYWORDS
        .iter()
        .any(|keyword| risk.contains(keyword))
    {
        score += 5;
    }

    if company_size.unwrap_or(0) >= LARGE_COMPANY_THRESHOLD
        && action.program_category.contains(CATEGORY_OCCUPATIONAL_HYGIENE)
    {
        score += 3;
    }

    if let Some(sector) = sector {
        let sector = sector.trim().to_lowercase();
        if !sector.is_empty() && action.sector_category.to_lowercase().contains(&sector) {
            score += 5;
        }
    }

    score
}
