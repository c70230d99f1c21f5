//! Panel record, row, and span models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::conf::N_PANEL_COLUMNS;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Where the "permission to reuse an existing question paper" flag lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumPermissionScope {
    /// One flag per subject; externals carry years of experience instead (default).
    #[default]
    Subject,
    /// One flag per external examiner.
    Examiner,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// Internal examiner entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecInternalExaminer {
    pub name: String,
}

/// External examiner entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecExternalExaminer {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    /// Per-examiner permission flag, read in [`EnumPermissionScope::Examiner`].
    pub verification: String,
    /// Read in [`EnumPermissionScope::Subject`].
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub years_of_experience: String,
}

/// One exam-panel entry for one subject.
///
/// Every field defaults to empty on deserialize so partially filled UI state
/// reaches the validator instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecSubjectRecord {
    pub subject_name: String,
    pub subject_code: String,
    pub semester: String,
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub students_enrolled: String,
    /// Subject-level permission flag, read in [`EnumPermissionScope::Subject`].
    pub verification: String,
    pub internals: Vec<SpecInternalExaminer>,
    pub externals: Vec<SpecExternalExaminer>,
}

impl SpecSubjectRecord {
    /// Physical row count of this subject's block: `max(internals, externals, 1)`.
    pub fn row_count(&self) -> usize {
        usize::max(1, usize::max(self.internals.len(), self.externals.len()))
    }
}

/// Subject stub listed on the unfilled-subject appendix sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecUnfilledSubject {
    pub subject_name: String,
    pub subject_code: String,
    pub semester: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnumTextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
    Null(()),
}

fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match EnumTextOrNumber::deserialize(deserializer)? {
        EnumTextOrNumber::Text(val) => val,
        EnumTextOrNumber::Integer(val) => val.to_string(),
        EnumTextOrNumber::Float(val) => val.to_string(),
        EnumTextOrNumber::Null(()) => String::new(),
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Rows

/// One rendered row. Subject-level fields are empty on continuation rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecPhysicalRow {
    /// Subject ordinal (1-based) on the first row, empty otherwise.
    pub serial: String,
    pub subject_name: String,
    pub subject_code: String,
    pub semester: String,
    pub students_enrolled: String,
    pub internal_name: String,
    pub external_name: String,
    pub external_address: String,
    pub external_contact: String,
    pub external_email: String,
    /// Subject-level or per-examiner flag, depending on the permission scope.
    pub permission: String,
    pub if_first_row_of_subject: bool,
    /// Rows in this subject's block. Only meaningful on the first row.
    pub n_rows_subject: usize,
}

impl SpecPhysicalRow {
    /// Cell texts in [`crate::conf::L_PANEL_COLUMN_TITLES`] order.
    pub fn to_cells(&self) -> [String; N_PANEL_COLUMNS] {
        [
            self.serial.clone(),
            self.subject_name.clone(),
            self.subject_code.clone(),
            self.semester.clone(),
            self.students_enrolled.clone(),
            self.internal_name.clone(),
            self.external_name.clone(),
            self.external_address.clone(),
            self.external_contact.clone(),
            self.external_email.clone(),
            self.permission.clone(),
        ]
    }
}

/// Flattened rows for a whole document plus the subject boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRowExpansion {
    pub rows: Vec<SpecPhysicalRow>,
    /// Row count per subject, in subject order.
    pub subject_row_counts: Vec<usize>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Spans

/// Inclusive rectangular cell range in absolute sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecMergeSpan {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl SpecMergeSpan {
    /// Whether `(row, col)` lies inside the span.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row_start..=self.row_end).contains(&row)
            && (self.col_start..=self.col_end).contains(&col)
    }

    /// Whether `(row, col)` is the top-left anchor of the span.
    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        self.row_start == row && self.col_start == col
    }
}

/// Merge spans plus the row cursor after the last subject.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecMergePlan {
    pub spans: Vec<SpecMergeSpan>,
    /// First row index after the data block.
    pub row_cursor_end: usize,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
