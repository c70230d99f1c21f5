//! Page geometry, typography, and label presets for the paginated renderer.

use examkit_panel::N_PANEL_COLUMNS;

/// A4 landscape.
pub const N_PAGE_WIDTH_MM: f32 = 297.0;
pub const N_PAGE_HEIGHT_MM: f32 = 210.0;
pub const N_PAGE_MARGIN_MM: f32 = 10.0;

/// Fixed column partition, in millimetres. Must fit the printable width.
pub const L_PDF_COLUMN_WIDTHS_MM: [f32; N_PANEL_COLUMNS] =
    [10.0, 34.0, 20.0, 16.0, 18.0, 30.0, 30.0, 40.0, 24.0, 36.0, 15.0];

pub const N_FONT_SIZE_INSTITUTION: f32 = 14.0;
pub const N_FONT_SIZE_DEPARTMENT: f32 = 11.0;
pub const N_FONT_SIZE_TITLE: f32 = 12.0;
pub const N_FONT_SIZE_TABLE: f32 = 8.0;
pub const N_FONT_SIZE_FOOTER: f32 = 9.0;

/// Baseline-to-baseline distance as a multiple of the font size.
pub const N_LINE_SPACING: f32 = 1.25;
/// Inner cell padding on every side, in points.
pub const N_CELL_PADDING_PT: f32 = 3.0;
pub const N_LINE_WIDTH_PT: f32 = 0.5;

/// Vertical space taken by institution, department, and title lines.
pub const N_HEADER_BLOCK_HEIGHT_MM: f32 = 22.0;
/// Vertical space reserved for signatures and page numbering.
pub const N_FOOTER_HEIGHT_MM: f32 = 20.0;
/// Grouping row above the column names.
pub const N_GROUP_ROW_HEIGHT_MM: f32 = 6.0;

/// Logo box drawn left of the header block.
pub const N_LOGO_HEIGHT_MM: f32 = 18.0;
pub const N_LOGO_WIDTH_MAX_MM: f32 = 40.0;

pub const C_DEFAULT_INSTITUTION: &str = "Institute of Engineering and Technology";
pub const C_DEFAULT_DEPARTMENT: &str = "Department of Computer Engineering";

pub const C_LABEL_SIGNATURE_COORDINATOR: &str = "Exam Coordinator Signature";
pub const C_LABEL_SIGNATURE_HOD: &str = "HOD Signature";
pub const N_SIGNATURE_LINE_MM: f32 = 60.0;
/// Height of the signature lines above the bottom margin.
pub const N_SIGNATURE_LINE_OFFSET_MM: f32 = 12.0;

/// Footer date format (`dd/mm/yyyy`).
pub const C_FORMAT_FOOTER_DATE: &str = "%d/%m/%Y";

/// Resource names and base-14 fonts.
pub const C_FONT_RESOURCE_REGULAR: &[u8] = b"F1";
pub const C_FONT_RESOURCE_BOLD: &[u8] = b"F2";
pub const C_FONT_BASE_REGULAR: &[u8] = b"Helvetica";
pub const C_FONT_BASE_BOLD: &[u8] = b"Helvetica-Bold";
pub const C_XOBJECT_RESOURCE_LOGO: &[u8] = b"Im1";

/// Zlib level for content and image streams.
pub const N_DEFLATE_LEVEL: u8 = 6;

pub const N_PT_PER_MM: f32 = 72.0 / 25.4;
