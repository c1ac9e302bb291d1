use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use prevention_sst::workflows::prevention::{
    ProgramId, ProgramRecord, ProgramRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Insertion-ordered in-memory store backing the service until a durable
/// repository lands.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProgramRepository {
    records: Arc<Mutex<Vec<ProgramRecord>>>,
}

impl ProgramRepository for InMemoryProgramRepository {
    fn insert(&self, record: ProgramRecord) -> Result<ProgramRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|known| known.program_id == record.program_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.program_id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ProgramRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let skip = guard.len().saturating_sub(limit);
        Ok(guard.iter().skip(skip).cloned().collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
