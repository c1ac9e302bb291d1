use super::normalizer::normalize_label;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) company_name: String,
    pub(crate) normalized_sector: Option<String>,
    pub(crate) scian_code: Option<String>,
    pub(crate) company_size: Option<String>,
    pub(crate) activities: Vec<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        let normalized_sector = row.sector.as_deref().map(normalize_label);
        let activities = row
            .activities
            .as_deref()
            .map(split_activities)
            .unwrap_or_default();

        records.push(RosterRecord {
            company_name: row.name,
            normalized_sector,
            scian_code: row.scian_code,
            company_size: row.size,
            activities,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "\u{c9}tablissement")]
    name: String,
    #[serde(rename = "Secteur", default, deserialize_with = "empty_string_as_none")]
    sector: Option<String>,
    #[serde(
        rename = "Code SCIAN",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    scian_code: Option<String>,
    #[serde(rename = "Effectif", default, deserialize_with = "empty_string_as_none")]
    size: Option<String>,
    #[serde(
        rename = "Activit\u{e9}s",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    activities: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn split_activities(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn split_activities_for_tests(value: &str) -> Vec<String> {
    split_activities(value)
}
