//! JSON input for callers outside Rust (CLI files, Python strings).

use std::collections::BTreeMap;

use serde::Deserialize;

use examkit_panel::{EnumPermissionScope, SpecSubjectRecord, SpecUnfilledSubject};

/// Records keyed by zero-based index, or a plain list (index = position).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EnumRecordsInput {
    Indexed(BTreeMap<String, SpecSubjectRecord>),
    Listed(Vec<SpecSubjectRecord>),
}

impl EnumRecordsInput {
    fn into_indexed(self) -> Result<BTreeMap<usize, SpecSubjectRecord>, String> {
        match self {
            Self::Indexed(dict_records) => dict_records
                .into_iter()
                .map(|(c_key, record)| {
                    c_key
                        .trim()
                        .parse::<usize>()
                        .map(|n_idx| (n_idx, record))
                        .map_err(|_| format!("invalid subject index: {c_key:?}"))
                })
                .collect(),
            Self::Listed(l_records) => Ok(l_records.into_iter().enumerate().collect()),
        }
    }
}

/// Parse subject records from JSON text.
pub fn parse_subject_records_json(
    text: &str,
) -> Result<BTreeMap<usize, SpecSubjectRecord>, String> {
    serde_json::from_str::<EnumRecordsInput>(text)
        .map_err(|err| format!("invalid subject records: {err}"))?
        .into_indexed()
}

/// Parse `subject` / `examiner`.
pub fn parse_rule_permission_scope(value: &str) -> Result<EnumPermissionScope, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "subject" => Ok(EnumPermissionScope::Subject),
        "examiner" => Ok(EnumPermissionScope::Examiner),
        _ => Err(format!(
            "Invalid permission scope: {value:?}. Expected \"subject\" or \"examiner\"."
        )),
    }
}

/// One export job as read from a request file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecExportRequest {
    pub title: String,
    records: EnumRecordsInput,
    /// Subjects to include; defaults to one past the highest index present.
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub unfilled_subjects: Vec<SpecUnfilledSubject>,
    #[serde(default)]
    pub semester_label: Option<String>,
}

impl SpecExportRequest {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|err| format!("invalid export request: {err}"))
    }

    /// Split into indexed records and the effective subject count.
    pub fn into_records(self) -> Result<(BTreeMap<usize, SpecSubjectRecord>, usize), String> {
        let dict_records = self.records.into_indexed()?;
        let n_subjects = self.count.unwrap_or_else(|| {
            dict_records
                .keys()
                .next_back()
                .map_or(0, |n_idx_max| n_idx_max + 1)
        });
        Ok((dict_records, n_subjects))
    }
}
