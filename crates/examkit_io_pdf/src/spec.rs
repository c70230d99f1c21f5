//! Paginated renderer models and errors.

use chrono::NaiveDate;
use thiserror::Error;

use examkit_panel::EnumPermissionScope;

use crate::conf::{
    C_DEFAULT_DEPARTMENT, C_DEFAULT_INSTITUTION, C_FONT_BASE_BOLD, C_FONT_BASE_REGULAR,
    C_FONT_RESOURCE_BOLD, C_FONT_RESOURCE_REGULAR,
};

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Lines drawn above the table on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPdfHeaderBlock {
    pub institution: String,
    pub department: String,
}

impl Default for SpecPdfHeaderBlock {
    fn default() -> Self {
        Self {
            institution: C_DEFAULT_INSTITUTION.to_string(),
            department: C_DEFAULT_DEPARTMENT.to_string(),
        }
    }
}

/// Paginated render options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPdfWriteOptions {
    pub header: SpecPdfHeaderBlock,
    /// PNG or JPEG bytes drawn left of the header block.
    pub logo: Option<Vec<u8>>,
    /// Date stamped in the footer. Fix it for reproducible bytes.
    pub date_footer: NaiveDate,
    /// Decides whether the permission column spans the subject block.
    pub rule_permission_scope: EnumPermissionScope,
}

impl Default for SpecPdfWriteOptions {
    fn default() -> Self {
        Self {
            header: SpecPdfHeaderBlock::default(),
            logo: None,
            date_footer: chrono::Local::now().date_naive(),
            rule_permission_scope: EnumPermissionScope::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PdfRenderError {
    #[error("column widths ({n_total_mm} mm) exceed the printable width ({n_printable_mm} mm)")]
    ColumnWidth { n_total_mm: f32, n_printable_mm: f32 },
    #[error("page layout error: {0}")]
    Layout(String),
    #[error("branding image could not be decoded: {0}")]
    Branding(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Table

/// One drawn cell. `n_rowspan > 1` extends the box over following rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPdfCell {
    pub col_idx: usize,
    pub text: String,
    pub n_rowspan: usize,
}

/// Cells emitted for one physical row.
///
/// Continuation rows of a subject omit the columns spanned from its first row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecPdfTableRow {
    pub cells: Vec<SpecPdfCell>,
}

/// Base-14 font variants used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumPdfFont {
    Regular,
    Bold,
}

impl EnumPdfFont {
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Self::Regular => C_FONT_RESOURCE_REGULAR,
            Self::Bold => C_FONT_RESOURCE_BOLD,
        }
    }

    pub fn base_font(self) -> &'static [u8] {
        match self {
            Self::Regular => C_FONT_BASE_REGULAR,
            Self::Bold => C_FONT_BASE_BOLD,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
