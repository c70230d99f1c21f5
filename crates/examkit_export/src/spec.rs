//! Export options, artifacts, and errors.

use chrono::NaiveDate;
use thiserror::Error;

use examkit_io_pdf::{PdfRenderError, SpecPdfHeaderBlock};
use examkit_panel::{EnumPermissionScope, SpecUnfilledSubject};

/// Export failure. Validation messages are meant to be shown verbatim.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("rendering failed: {0}")]
    Rendering(String),
}

impl From<PdfRenderError> for ExportError {
    fn from(err: PdfRenderError) -> Self {
        Self::Rendering(err.to_string())
    }
}

/// Output format plus its variant-specific inputs.
#[derive(Debug, Clone, Copy)]
pub enum EnumExportVariant<'a> {
    Grid,
    Paginated,
    /// Grid plus a sheet of subjects that have no panel yet.
    GridWithAppendix {
        unfilled: &'a [SpecUnfilledSubject],
        semester_label: &'a str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExportOptions {
    pub rule_permission_scope: EnumPermissionScope,
    /// Frozen "today": stamped into workbook properties and the PDF footer.
    pub date_export: NaiveDate,
    pub pdf_header: SpecPdfHeaderBlock,
    /// PNG/JPEG logo for the paginated header.
    pub pdf_logo: Option<Vec<u8>>,
}

impl Default for SpecExportOptions {
    fn default() -> Self {
        Self {
            rule_permission_scope: EnumPermissionScope::default(),
            date_export: chrono::Local::now().date_naive(),
            pdf_header: SpecPdfHeaderBlock::default(),
            pdf_logo: None,
        }
    }
}

/// Rendered document ready to be saved or streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
