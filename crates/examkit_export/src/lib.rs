//! `examkit_export` v1:
//! Export orchestration for panel-of-examiners documents.
//!
//! Modules:
//! - `conf`   : file names and appendix labels
//! - `spec`   : options, variants, artifacts, errors
//! - `export` : validate -> expand -> span -> render
//! - `input`  : JSON records and request files
pub mod conf;
pub mod export;
pub mod input;
pub mod spec;

pub use export::{
    derive_appendix_file_name, export_grid, export_grid_with_appendix, export_paginated,
    export_panel,
};
pub use input::{SpecExportRequest, parse_rule_permission_scope, parse_subject_records_json};
pub use spec::{EnumExportVariant, ExportError, SpecExportArtifact, SpecExportOptions};

pub use examkit_io_pdf::SpecPdfHeaderBlock;
pub use examkit_panel::{EnumPermissionScope, SpecSubjectRecord, SpecUnfilledSubject};
