//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use examkit_panel::N_PANEL_COLUMNS;

use crate::spec::{EnumGridBand, SpecCellFormat};

/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Main sheet of every panel workbook.
pub const C_SHEET_NAME_PANEL: &str = "Panel of Examiners";
/// Appendix sheet listing subjects without panel data.
pub const C_SHEET_NAME_UNFILLED: &str = "Unfilled Subjects";

/// Title, external-group banner, column names.
pub const N_ROWS_HEADER_PANEL: usize = 3;
/// Absolute row index of the first data row on the panel sheet.
pub const N_ROW_DATA_START: usize = N_ROWS_HEADER_PANEL;

/// Column titles on the unfilled-subject sheet.
pub const L_UNFILLED_COLUMN_TITLES: [&str; 4] = ["Sl No", "Subject", "Subject Code", "Semester"];

/// Panel sheet column widths, in Excel character units.
pub const L_PANEL_COLUMN_WIDTHS: [f64; N_PANEL_COLUMNS] =
    [6.0, 28.0, 14.0, 10.0, 12.0, 24.0, 24.0, 36.0, 16.0, 30.0, 16.0];
/// Unfilled-subject sheet column widths, in Excel character units.
pub const L_UNFILLED_COLUMN_WIDTHS: [f64; 4] = [6.0, 36.0, 16.0, 12.0];

/// Height of the title row, in points.
pub const N_HEIGHT_TITLE_ROW: f64 = 30.0;

/// Build default per-band format presets used by [`crate::writer::XlsxWriter`].
///
/// Every band shares centered, wrapped, thin-bordered cells; bands only
/// differ in weight and size.
pub fn derive_default_grid_formats() -> BTreeMap<EnumGridBand, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some("Times New Roman".to_string()),
        font_size: Some(11),
        border: Some(1),
        align: Some("center".to_string()),
        valign: Some("vcenter".to_string()),
        text_wrap: Some(true),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumGridBand::Title,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(14),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumGridBand::Header,
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(EnumGridBand::Body, cfg_base_fmt_spec);

    dict_fmt
}
