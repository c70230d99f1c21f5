//! XLSX writer kernel that serializes grid documents into workbook bytes.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
    XlsxError,
};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, derive_default_grid_formats};
use crate::spec::{EnumGridBand, SpecCellFormat, SpecGridDocument, SpecXlsxReport};
use crate::util::{derive_merge_tracker, sanitize_sheet_name, validate_merge_spans};

/// Stateful in-memory workbook writer.
///
/// Sheets are appended with [`Self::write_grid`]; bytes are produced by
/// [`Self::save_to_buffer`].
pub struct XlsxWriter {
    workbook: Workbook,
    dict_fmt: BTreeMap<EnumGridBand, SpecCellFormat>,
    set_sheet_names_existing: BTreeSet<String>,
    report: SpecXlsxReport,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new(derive_default_grid_formats())
    }
}

impl XlsxWriter {
    /// Create writer with per-band format presets.
    ///
    /// Bands missing from `dict_fmt` fall back to an empty format.
    pub fn new(dict_fmt: BTreeMap<EnumGridBand, SpecCellFormat>) -> Self {
        Self {
            workbook: Workbook::new(),
            dict_fmt,
            set_sheet_names_existing: BTreeSet::new(),
            report: SpecXlsxReport::default(),
        }
    }

    /// Stamp workbook creation date so output bytes only depend on inputs.
    pub fn set_creation_date(&mut self, date: NaiveDate) -> Result<(), String> {
        let n_year = u16::try_from(date.year())
            .map_err(|_| format!("creation year out of range: {}", date.year()))?;
        let datetime = ExcelDateTime::from_ymd(n_year, date.month() as u8, date.day() as u8)
            .map_err(derive_xlsx_error_text)?;
        let properties = DocProperties::new().set_creation_datetime(&datetime);
        self.workbook.set_properties(&properties);
        Ok(())
    }

    /// Return snapshot of the write report.
    pub fn report(&self) -> SpecXlsxReport {
        self.report.clone()
    }

    /// Write one grid document as a new sheet.
    pub fn write_grid(&mut self, doc: &SpecGridDocument) -> Result<(), String> {
        validate_merge_spans(&doc.merges, doc.n_rows, doc.n_cols)?;
        if doc.col_widths.len() > doc.n_cols {
            self.report.warn(format!(
                "{} column widths given for {} columns; extra widths ignored.",
                doc.col_widths.len(),
                doc.n_cols
            ));
        }

        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(&doc.sheet_name, "_"));
        let dict_fmt_xlsx: BTreeMap<EnumGridBand, Format> = [
            EnumGridBand::Title,
            EnumGridBand::Header,
            EnumGridBand::Body,
        ]
        .into_iter()
        .map(|band| {
            let spec = self.dict_fmt.get(&band).cloned().unwrap_or_default();
            (band, derive_rust_xlsx_format(&spec))
        })
        .collect();
        let set_covered = derive_merge_tracker(&doc.merges);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;

        for ((row_idx, col_idx), cell) in &doc.cells {
            let format = &dict_fmt_xlsx[&cell.band];
            let c_text = if set_covered.contains(&(*row_idx, *col_idx)) {
                ""
            } else {
                cell.text.as_str()
            };
            write_cell_with_format(worksheet, *row_idx, *col_idx, c_text, format)?;
        }

        for merge in &doc.merges {
            let band = doc
                .cells
                .get(&(merge.row_start, merge.col_start))
                .map_or(EnumGridBand::Body, |cell| cell.band);
            worksheet
                .merge_range(
                    cast_row_num(merge.row_start)?,
                    cast_col_num(merge.col_start)?,
                    cast_row_num(merge.row_end)?,
                    cast_col_num(merge.col_end)?,
                    doc.text(merge.row_start, merge.col_start),
                    &dict_fmt_xlsx[&band],
                )
                .map_err(derive_xlsx_error_text)?;
        }

        for (col_idx, n_width) in doc.col_widths.iter().take(doc.n_cols).enumerate() {
            worksheet
                .set_column_width(cast_col_num(col_idx)?, *n_width)
                .map_err(derive_xlsx_error_text)?;
        }
        for (row_idx, n_height) in &doc.row_heights {
            worksheet
                .set_row_height(cast_row_num(*row_idx)?, *n_height)
                .map_err(derive_xlsx_error_text)?;
        }
        if let Some(n_row_freeze) = doc.row_freeze {
            worksheet
                .set_freeze_panes(cast_row_num(n_row_freeze)?, 0)
                .map_err(derive_xlsx_error_text)?;
        }

        log::debug!(
            "sheet {sheet_name_unique:?}: {} cell(s), {} merge(s)",
            doc.cells.len(),
            doc.merges.len()
        );
        self.report.sheets.push(sheet_name_unique);
        self.report.n_merges += doc.merges.len();
        Ok(())
    }

    /// Serialize the workbook into XLSX bytes.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, String> {
        if self.report.sheets.is_empty() {
            return Err("Cannot save a workbook without sheets.".to_string());
        }
        self.workbook
            .save_to_buffer()
            .map_err(derive_xlsx_error_text)
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &str,
    format: &Format,
) -> Result<(), String> {
    if value.is_empty() {
        worksheet
            .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
            .map_err(derive_xlsx_error_text)?;
    } else {
        worksheet
            .write_string_with_format(cast_row_num(row_idx)?, cast_col_num(col_idx)?, value, format)
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "justify" => Some(FormatAlign::Justify),
        "center_across" => Some(FormatAlign::CenterAcross),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{derive_panel_grid, derive_unfilled_grid};
    use examkit_panel::{SpecMergeSpan, SpecPhysicalRow, SpecUnfilledSubject};

    fn create_rows() -> Vec<SpecPhysicalRow> {
        vec![
            SpecPhysicalRow {
                serial: "1".to_string(),
                subject_name: "Operating Systems".to_string(),
                subject_code: "CS401".to_string(),
                semester: "IV".to_string(),
                students_enrolled: "58".to_string(),
                internal_name: "Dr. A".to_string(),
                external_name: "Dr. B".to_string(),
                permission: "No".to_string(),
                if_first_row_of_subject: true,
                n_rows_subject: 2,
                ..Default::default()
            },
            SpecPhysicalRow {
                external_name: "Dr. C".to_string(),
                ..Default::default()
            },
        ]
    }

    fn create_spans() -> Vec<SpecMergeSpan> {
        [0, 1, 2, 3, 4, 10]
            .into_iter()
            .map(|col_idx| SpecMergeSpan {
                row_start: 3,
                row_end: 4,
                col_start: col_idx,
                col_end: col_idx,
            })
            .collect()
    }

    fn create_workbook_bytes() -> Vec<u8> {
        let mut writer = XlsxWriter::default();
        writer
            .set_creation_date(NaiveDate::from_ymd_opt(2026, 10, 16).expect("date"))
            .expect("creation date");
        writer
            .write_grid(&derive_panel_grid(&create_rows(), &create_spans(), "Panel"))
            .expect("write panel");
        writer.save_to_buffer().expect("save")
    }

    #[test]
    fn test_write_grid_produces_zip_container() {
        let v_bytes = create_workbook_bytes();
        assert!(v_bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_write_grid_is_reproducible_with_fixed_date() {
        assert_eq!(create_workbook_bytes(), create_workbook_bytes());
    }

    #[test]
    fn test_report_lists_sheets_and_merges() {
        let mut writer = XlsxWriter::default();
        writer
            .write_grid(&derive_panel_grid(&create_rows(), &create_spans(), "Panel"))
            .expect("write panel");
        writer
            .write_grid(&derive_unfilled_grid(
                &[SpecUnfilledSubject::default()],
                "Unfilled Subjects - Semester IV",
            ))
            .expect("write appendix");

        let report = writer.report();
        assert_eq!(report.sheets, vec!["Panel of Examiners", "Unfilled Subjects"]);
        assert_eq!(report.n_merges, 2 + 6 + 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_sheet_names_are_suffixed() {
        let mut writer = XlsxWriter::default();
        let doc = derive_unfilled_grid(&[], "Unfilled");
        writer.write_grid(&doc).expect("first");
        writer.write_grid(&doc).expect("second");
        assert_eq!(
            writer.report().sheets,
            vec!["Unfilled Subjects", "Unfilled Subjects__2"]
        );
    }

    #[test]
    fn test_overlapping_spans_are_rejected() {
        let mut l_spans = create_spans();
        l_spans.push(l_spans[0]);

        let mut writer = XlsxWriter::default();
        let err = writer
            .write_grid(&derive_panel_grid(&create_rows(), &l_spans, "Panel"))
            .expect_err("overlap");
        assert!(err.contains("Overlapping"));
    }

    #[test]
    fn test_save_without_sheets_fails() {
        assert!(XlsxWriter::default().save_to_buffer().is_err());
    }
}
