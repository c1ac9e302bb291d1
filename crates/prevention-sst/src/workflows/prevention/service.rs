use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{CompanyProfile, ProgramId};
use super::generator::PreventionProgramGenerator;
use super::markdown::export_to_markdown;
use super::repository::{ProgramRecord, ProgramRepository, RepositoryError};

static PROGRAM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_program_id() -> ProgramId {
    let id = PROGRAM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProgramId(format!("prog-{id:06}"))
}

/// Service composing the generation pipeline with a persistence backend.
pub struct PreventionProgramService<R> {
    repository: Arc<R>,
}

impl<R> PreventionProgramService<R>
where
    R: ProgramRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Generate a program for the profile and persist the record.
    pub fn generate(&self, profile: CompanyProfile) -> Result<ProgramRecord, ProgramServiceError> {
        let program = PreventionProgramGenerator::generate_program(&profile);
        self.store(profile, program)
    }

    /// Date-injected variant used by batch imports and tests.
    pub fn generate_on(
        &self,
        profile: CompanyProfile,
        today: NaiveDate,
    ) -> Result<ProgramRecord, ProgramServiceError> {
        let program = PreventionProgramGenerator::generate_program_on(&profile, today);
        self.store(profile, program)
    }

    fn store(
        &self,
        profile: CompanyProfile,
        program: super::domain::PreventionProgram,
    ) -> Result<ProgramRecord, ProgramServiceError> {
        let record = ProgramRecord {
            program_id: next_program_id(),
            profile,
            program,
        };
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored program record.
    pub fn get(&self, program_id: &ProgramId) -> Result<ProgramRecord, ProgramServiceError> {
        let record = self
            .repository
            .fetch(program_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Export a stored program as Markdown.
    pub fn markdown(&self, program_id: &ProgramId) -> Result<String, ProgramServiceError> {
        let record = self.get(program_id)?;
        Ok(export_to_markdown(&record.program))
    }

    /// Most recently stored records, newest last.
    pub fn recent(&self, limit: usize) -> Result<Vec<ProgramRecord>, ProgramServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the program service.
#[derive(Debug, thiserror::Error)]
pub enum ProgramServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
