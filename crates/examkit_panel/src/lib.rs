//! `examkit_panel` v1:
//! Panel-of-examiners data model and layout kernel.
//!
//! Modules:
//! - `conf`     : column layout constants and validation thresholds
//! - `spec`     : records/rows/spans/options
//! - `validate` : collect-all record validation
//! - `expand`   : subject records -> physical rows
//! - `merge`    : per-subject row counts -> merge spans
pub mod conf;
pub mod expand;
pub mod merge;
pub mod spec;
pub mod validate;

pub use conf::{
    C_EXTERNAL_GROUP_LABEL, L_PANEL_COLUMN_TITLES, N_COL_EXTERNAL_GROUP_END,
    N_COL_EXTERNAL_GROUP_START, N_COL_INTERNAL, N_COL_PERMISSION, N_CONTACT_DIGITS,
    N_PANEL_COLUMNS, N_YEARS_EXPERIENCE_MIN,
};
pub use expand::{expand_subject_records, select_subject_records};
pub use merge::{derive_merge_columns, plan_merge_spans};
pub use spec::{
    EnumPermissionScope, SpecExternalExaminer, SpecInternalExaminer, SpecMergePlan, SpecMergeSpan,
    SpecPhysicalRow, SpecRowExpansion, SpecSubjectRecord, SpecUnfilledSubject,
};
pub use validate::validate_subject_records;
