use serde::Serialize;

use super::domain::{CompanyProfile, PreventionProgram, ProgramId};

/// Repository record pairing the requesting profile with its generated
/// program.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramRecord {
    pub program_id: ProgramId,
    pub profile: CompanyProfile,
    pub program: PreventionProgram,
}

impl ProgramRecord {
    pub fn summary_view(&self) -> ProgramSummaryView {
        ProgramSummaryView {
            program_id: self.program_id.clone(),
            company_name: self.program.company_info.name.clone(),
            sector: self.program.company_info.sector.clone(),
            company_size: self.program.company_info.size,
            section_count: self.program.sections.len(),
            generated_date: self.program.generated_date.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProgramRepository: Send + Sync {
    fn insert(&self, record: ProgramRecord) -> Result<ProgramRecord, RepositoryError>;
    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<ProgramRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized projection of a stored program for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramSummaryView {
    pub program_id: ProgramId,
    pub company_name: String,
    pub sector: String,
    pub company_size: u32,
    pub section_count: usize,
    pub generated_date: String,
}
