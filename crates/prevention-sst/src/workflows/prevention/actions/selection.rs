use super::super::catalog;
use super::super::domain::ScianAction;

const CATEGORY_RISK_CONTROL: &str = "Contrôle du risque";
const CATEGORY_RISK_IDENTIFICATION: &str = "Identification des risques";

/// Company-size tier driving action eligibility.
///
/// The tiers are mutually exclusive branches, classified once, never
/// additive filters. An unspecified or zero size lands in `Micro`, which
/// applies no filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 500 employees and more: the full catalog applies.
    Large,
    /// 100 to 499: risk-control and risk-identification actions.
    Medium,
    /// 20 to 99: risk-identification actions only.
    Small,
    /// Under 20 or unspecified: no size gating.
    Micro,
}

impl SizeTier {
    pub fn classify(company_size: Option<u32>) -> Self {
        match company_size.unwrap_or(0) {
            size if size >= 500 => Self::Large,
            size if size >= 100 => Self::Medium,
            size if size >= 20 => Self::Small,
            _ => Self::Micro,
        }
    }

    fn admits(self, action: &ScianAction) -> bool {
        match self {
            Self::Large | Self::Micro => true,
            Self::Medium => {
                action.program_category.contains(CATEGORY_RISK_CONTROL)
                    || action.program_category.contains(CATEGORY_RISK_IDENTIFICATION)
            }
            Self::Small => action.program_category.contains(CATEGORY_RISK_IDENTIFICATION),
        }
    }
}

/// Loose correlation between a free-text sector name and a catalog
/// sector-category label: case-insensitive substring match in either
/// direction, tolerating the label drift between user input and catalog
/// categories. Kept as a named predicate so it can be replaced by a proper
/// taxonomy mapping without touching the filter control flow.
pub fn fuzzy_sector_match(sector: &str, category: &str) -> bool {
    let sector = sector.trim().to_lowercase();
    let category = category.trim().to_lowercase();
    category.contains(&sector) || sector.contains(&category)
}

/// Filter the static action catalog by sector affinity and company-size
/// tier. Catalog order is preserved; prioritization happens separately.
pub fn get_scian_actions(sector: Option<&str>, company_size: Option<u32>) -> Vec<ScianAction> {
    let tier = SizeTier::classify(company_size);

    catalog::scian_action_catalog()
        .into_iter()
        .filter(|action| match sector {
            Some(sector) => fuzzy_sector_match(sector, action.sector_category),
            None => true,
        })
        .filter(|action| tier.admits(action))
        .collect()
}
