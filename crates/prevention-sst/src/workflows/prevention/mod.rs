//! Prevention-program generation for Quebec workplaces under the LMRSST.
//!
//! The pipeline runs in three stages: risk identification from the employer's
//! SCIAN code and sector, action selection and prioritization against the
//! sector catalog, and assembly of the nine-section program document with its
//! Markdown export.

pub mod actions;
pub mod catalog;
pub mod domain;
pub mod generator;
pub mod markdown;
pub mod publish;
pub mod repository;
pub mod risks;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use actions::{fuzzy_sector_match, get_scian_actions, prioritize_scian_actions, SizeTier};
pub use domain::{
    CommitteeStructure, CompanyInfo, CompanyProfile, PreventionProgram, ProgramId, ProgramSection,
    ScianAction,
};
pub use generator::PreventionProgramGenerator;
pub use markdown::export_to_markdown;
pub use publish::{ProgramPublisher, PublishError, PublishRequest, PublishedProgram};
pub use repository::{ProgramRecord, ProgramRepository, ProgramSummaryView, RepositoryError};
pub use risks::identify_risks_by_scian;
pub use router::program_router;
pub use service::{PreventionProgramService, ProgramServiceError};
