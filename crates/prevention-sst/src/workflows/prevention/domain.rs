use serde::{Deserialize, Serialize};

/// Identifier wrapper for generated programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Establishment profile driving one generation request.
///
/// Malformed values degrade, they never fail: an empty `sector` falls back to
/// the default risk set, an unknown `scian_code` contributes nothing, and a
/// `company_size` of zero bypasses the size-tier filters entirely. Input
/// validation belongs to the caller, not this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub sector: String,
    #[serde(default)]
    pub scian_code: Option<String>,
    #[serde(default)]
    pub company_size: u32,
    #[serde(default)]
    pub main_activities: Vec<String>,
    #[serde(default)]
    pub identified_risks: Vec<String>,
    #[serde(default)]
    pub existing_measures: Vec<String>,
}

/// One recommended compliance action from the static SCIAN catalog.
///
/// Catalog entries are immutable data; selection and prioritization operate
/// on copies and never mutate the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScianAction {
    pub id: &'static str,
    /// Sector-category label the action targets, matched fuzzily against
    /// free-text sector names.
    pub sector_category: &'static str,
    /// Program category tag (e.g. "Identification des risques") used by the
    /// company-size gating.
    pub program_category: &'static str,
    /// Risk label the action addresses.
    pub risk: &'static str,
    /// Short action statement.
    pub action: &'static str,
    /// Goal/purpose statement.
    pub goal: &'static str,
    /// Applicable reference standards (LMRSST/LSST articles, CSA norms).
    pub standards: Vec<&'static str>,
    /// Ordered implementation sub-steps.
    pub steps: Vec<&'static str>,
}

/// Titled section of a generated program; subsections nest one level deep in
/// the Markdown projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub subsections: Vec<ProgramSection>,
}

/// Snapshot of the requesting establishment embedded in the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub sector: String,
    #[serde(default)]
    pub scian_code: Option<String>,
    pub size: u32,
}

/// The generated compliance document aggregate.
///
/// Immutable after construction; both date fields carry the generation-time
/// snapshot since no update path exists in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreventionProgram {
    pub title: String,
    pub company_info: CompanyInfo,
    pub sections: Vec<ProgramSection>,
    pub generated_date: String,
    pub last_updated: String,
}

/// Participation mechanism mandated by the LMRSST, branching on workforce
/// size at the 20-employee threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitteeStructure {
    /// SST committee with paritary representation; count per side is
    /// ceil(size / 100).
    Committee { representatives_per_side: u32 },
    /// Single designated liaison agent for establishments under 20 workers.
    LiaisonAgent,
}

impl CommitteeStructure {
    pub fn for_size(company_size: u32) -> Self {
        if company_size >= 20 {
            Self::Committee {
                representatives_per_side: company_size.div_ceil(100),
            }
        } else {
            Self::LiaisonAgent
        }
    }

    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Committee { .. } => "COMITÉ DE SANTÉ ET SÉCURITÉ",
            Self::LiaisonAgent => "AGENT DE LIAISON SST",
        }
    }
}
