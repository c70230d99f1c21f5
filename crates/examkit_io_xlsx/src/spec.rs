//! Grid document, cell format, and write report models.

use std::collections::BTreeMap;

use examkit_panel::SpecMergeSpan;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
        }
    }
}

/// Presentation band a grid row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumGridBand {
    /// Title and banner rows: bold, larger.
    Title,
    /// Column-name row: bold.
    Header,
    /// Data rows: regular weight.
    Body,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridDocument

/// One addressed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecGridCell {
    /// Display text; empty for styled blanks.
    pub text: String,
    /// Format band applied at write time.
    pub band: EnumGridBand,
}

/// Format-independent sheet: sparse cells, merges, and sizing hints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecGridDocument {
    /// Requested sheet name (sanitized at write time).
    pub sheet_name: String,
    /// Occupied row count.
    pub n_rows: usize,
    /// Occupied column count.
    pub n_cols: usize,
    /// Cells keyed by `(row, col)`.
    pub cells: BTreeMap<(usize, usize), SpecGridCell>,
    /// Merged ranges, header merges first.
    pub merges: Vec<SpecMergeSpan>,
    /// Column widths in Excel character units.
    pub col_widths: Vec<f64>,
    /// Explicit row heights in points.
    pub row_heights: BTreeMap<usize, f64>,
    /// Band for rows without an explicit cell band (`row -> band`).
    pub row_bands: BTreeMap<usize, EnumGridBand>,
    /// Rows above this index stay frozen while scrolling.
    pub row_freeze: Option<usize>,
}

impl SpecGridDocument {
    /// Create an empty document of `n_cols` columns.
    pub fn new(sheet_name: &str, n_cols: usize) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            n_cols,
            ..Default::default()
        }
    }

    /// Write one row of texts at `row_idx`, growing the occupied range.
    pub fn push_row<I, S>(&mut self, row_idx: usize, values: I, band: EnumGridBand)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (col_idx, value) in values.into_iter().enumerate() {
            self.cells.insert(
                (row_idx, col_idx),
                SpecGridCell {
                    text: value.into(),
                    band,
                },
            );
        }
        self.row_bands.insert(row_idx, band);
        self.n_rows = usize::max(self.n_rows, row_idx + 1);
    }

    /// Cell text at `(row, col)`, empty when absent.
    pub fn text(&self, row_idx: usize, col_idx: usize) -> &str {
        self.cells
            .get(&(row_idx, col_idx))
            .map_or("", |cell| cell.text.as_str())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-workbook write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheet names actually written, in order.
    pub sheets: Vec<String>,
    /// Total merged ranges written.
    pub n_merges: usize,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
