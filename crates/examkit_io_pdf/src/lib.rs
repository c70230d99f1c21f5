//! `examkit_io_pdf` v1:
//! Paginated renderer for panel-of-examiners documents.
//!
//! Modules:
//! - `conf`   : page geometry, fonts, labels
//! - `spec`   : header block, write options, table cells, errors
//! - `util`   : spanned rows, text metrics, wrapping, pagination, WinAnsi
//! - `writer` : rows -> PDF bytes
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{C_DEFAULT_DEPARTMENT, C_DEFAULT_INSTITUTION, L_PDF_COLUMN_WIDTHS_MM};
pub use spec::{
    EnumPdfFont, PdfRenderError, SpecPdfCell, SpecPdfHeaderBlock, SpecPdfTableRow,
    SpecPdfWriteOptions,
};
pub use util::{derive_pdf_table_rows, plan_pages, wrap_text};
pub use writer::render_paginated;
