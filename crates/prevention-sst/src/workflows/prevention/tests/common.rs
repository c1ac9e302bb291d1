use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::workflows::prevention::domain::{CompanyProfile, PreventionProgram, ProgramId};
use crate::workflows::prevention::generator::PreventionProgramGenerator;
use crate::workflows::prevention::repository::{
    ProgramRecord, ProgramRepository, RepositoryError,
};

pub(super) fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn construction_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Toitures Gagnon".to_string(),
        sector: "construction".to_string(),
        scian_code: Some("2361".to_string()),
        company_size: 35,
        main_activities: vec!["Toitures r\u{e9}sidentielles".to_string()],
        identified_risks: Vec::new(),
        existing_measures: vec!["Port du harnais obligatoire".to_string()],
    }
}

pub(super) fn large_manufacturer() -> CompanyProfile {
    CompanyProfile {
        company_name: "Acier Lachine".to_string(),
        sector: "manufacturier".to_string(),
        scian_code: Some("3321".to_string()),
        company_size: 620,
        main_activities: Vec::new(),
        identified_risks: Vec::new(),
        existing_measures: Vec::new(),
    }
}

pub(super) fn micro_services_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Comptabilit\u{e9} Rive-Sud".to_string(),
        sector: "services".to_string(),
        scian_code: None,
        company_size: 8,
        main_activities: Vec::new(),
        identified_risks: Vec::new(),
        existing_measures: Vec::new(),
    }
}

pub(super) fn generate(profile: &CompanyProfile) -> PreventionProgram {
    PreventionProgramGenerator::generate_program_on(profile, fixed_date())
}

#[derive(Debug, Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<String, ProgramRecord>>,
}

impl ProgramRepository for MemoryRepository {
    fn insert(&self, record: ProgramRecord) -> Result<ProgramRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex");
        if guard.contains_key(&record.program_id.0) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.program_id.0.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex");
        Ok(guard.get(&id.0).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ProgramRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex");
        let mut records: Vec<ProgramRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.program_id.0.cmp(&b.program_id.0));
        let skip = records.len().saturating_sub(limit);
        Ok(records.into_iter().skip(skip).collect())
    }
}

#[derive(Debug)]
pub(super) struct ConflictRepository;

impl ProgramRepository for ConflictRepository {
    fn insert(&self, _record: ProgramRecord) -> Result<ProgramRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ProgramRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}
