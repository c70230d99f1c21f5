//! `examkit_io_xlsx` v1:
//! Grid renderer for panel-of-examiners workbooks.
//!
//! Modules:
//! - `conf`   : sheet constants and default format presets
//! - `spec`   : cell formats, grid document, reports
//! - `util`   : pure grid helpers (sheet names, header merges, presentation pass)
//! - `layout` : panel rows/spans -> grid documents
//! - `writer` : grid documents -> XLSX bytes
pub mod conf;
pub mod layout;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_SHEET_NAME_PANEL, C_SHEET_NAME_UNFILLED, N_LEN_EXCEL_SHEET_NAME_MAX, N_ROW_DATA_START,
    TUP_EXCEL_ILLEGAL,
};
pub use layout::{derive_panel_grid, derive_unfilled_grid};
pub use spec::{EnumGridBand, SpecCellFormat, SpecGridCell, SpecGridDocument, SpecXlsxReport};
pub use util::{apply_grid_presentation, plan_header_merges, sanitize_sheet_name};
pub use writer::XlsxWriter;
