//! Batch intake of employer rosters exported as CSV.
//!
//! A roster row carries an establishment name, a sector label, an optional
//! SCIAN code, and a headcount. Rows are normalized into [`CompanyProfile`]
//! values so a full roster can be pushed through the program generator in
//! one pass.

mod mapping;
mod normalizer;
mod parser;

use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

use crate::workflows::prevention::domain::{CompanyProfile, PreventionProgram};
use crate::workflows::prevention::generator::PreventionProgramGenerator;

use parser::RosterRecord;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Record { row: usize, message: String },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read employer roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Record { row, message } => {
                write!(f, "invalid roster row {}: {}", row, message)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Record { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyProfile>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CompanyProfile>, RosterImportError> {
        let mut profiles = Vec::new();

        for (index, record) in parser::parse_records(reader)?.into_iter().enumerate() {
            // Header occupies the first line of the file.
            let row = index + 2;
            profiles.push(profile_from_record(record, row)?);
        }

        Ok(profiles)
    }

    /// Generates a program for every establishment in the roster. Generation
    /// itself is infallible; a profile with missing fields still yields a
    /// generic program.
    pub fn generate_programs_on(
        profiles: &[CompanyProfile],
        today: NaiveDate,
    ) -> Vec<PreventionProgram> {
        profiles
            .iter()
            .map(|profile| PreventionProgramGenerator::generate_program_on(profile, today))
            .collect()
    }
}

fn profile_from_record(
    record: RosterRecord,
    row: usize,
) -> Result<CompanyProfile, RosterImportError> {
    let RosterRecord {
        company_name,
        normalized_sector,
        scian_code,
        company_size,
        activities,
    } = record;

    if company_name.trim().is_empty() {
        return Err(RosterImportError::Record {
            row,
            message: "\u{e9}tablissement name is blank".to_string(),
        });
    }

    let company_size = match company_size {
        Some(raw) => raw.parse::<u32>().map_err(|_| RosterImportError::Record {
            row,
            message: format!("effectif {:?} is not a number", raw),
        })?,
        None => 0,
    };

    let sector = normalized_sector
        .map(|label| {
            mapping::sector_key_for_normalized(&label)
                .map(str::to_string)
                .unwrap_or(label)
        })
        .unwrap_or_default();

    Ok(CompanyProfile {
        company_name,
        sector,
        scian_code,
        company_size,
        main_activities: activities,
        identified_risks: Vec::new(),
        existing_measures: Vec::new(),
    })
}
