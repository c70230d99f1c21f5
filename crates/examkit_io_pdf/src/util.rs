//! Pure layout helpers: spanned table rows, text metrics, wrapping, pagination.

use std::ops::Range;

use examkit_panel::{EnumPermissionScope, SpecPhysicalRow, derive_merge_columns};

use crate::conf::{
    N_CELL_PADDING_PT, N_LINE_SPACING, N_PAGE_MARGIN_MM, N_PAGE_WIDTH_MM, N_PT_PER_MM,
};
use crate::spec::{EnumPdfFont, PdfRenderError, SpecPdfCell, SpecPdfTableRow};

////////////////////////////////////////////////////////////////////////////////
// #region Geometry

pub fn mm_to_pt(n_mm: f32) -> f32 {
    n_mm * N_PT_PER_MM
}

/// Reject a column partition that does not fit strictly inside the printable width.
pub fn validate_column_widths(widths_mm: &[f32]) -> Result<(), PdfRenderError> {
    let n_total_mm: f32 = widths_mm.iter().sum();
    let n_printable_mm = N_PAGE_WIDTH_MM - 2.0 * N_PAGE_MARGIN_MM;
    if n_total_mm >= n_printable_mm {
        return Err(PdfRenderError::ColumnWidth {
            n_total_mm,
            n_printable_mm,
        });
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableRows

/// Convert physical rows into drawn rows with vertical spans.
///
/// The first row of a subject carries its subject-level columns with
/// `n_rowspan` equal to the subject's row count; continuation rows only emit
/// the per-examiner columns.
pub fn derive_pdf_table_rows(
    rows: &[SpecPhysicalRow],
    rule_scope: EnumPermissionScope,
) -> Vec<SpecPdfTableRow> {
    let l_cols_spanned = derive_merge_columns(rule_scope);

    rows.iter()
        .map(|row| {
            let n_rowspan = usize::max(1, row.n_rows_subject);
            let cells = row
                .to_cells()
                .into_iter()
                .enumerate()
                .filter_map(|(col_idx, text)| {
                    let if_spanned = l_cols_spanned.contains(&col_idx);
                    if if_spanned && !row.if_first_row_of_subject {
                        return None;
                    }
                    Some(SpecPdfCell {
                        col_idx,
                        text,
                        n_rowspan: if if_spanned { n_rowspan } else { 1 },
                    })
                })
                .collect();
            SpecPdfTableRow { cells }
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TextMetrics

/// Helvetica advance widths for U+0020..=U+007E, in 1/1000 em.
const L_WIDTHS_HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold advance widths for U+0020..=U+007E, in 1/1000 em.
const L_WIDTHS_HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

const N_WIDTH_FALLBACK: u16 = 556;

/// Approximate rendered width of `text`, in points.
pub fn estimate_text_width(text: &str, font: EnumPdfFont, n_size: f32) -> f32 {
    let l_widths = match font {
        EnumPdfFont::Regular => &L_WIDTHS_HELVETICA,
        EnumPdfFont::Bold => &L_WIDTHS_HELVETICA_BOLD,
    };
    let n_units: u32 = text
        .chars()
        .map(|ch| {
            let n_code = ch as usize;
            let n_width = if (0x20..=0x7E).contains(&n_code) {
                l_widths[n_code - 0x20]
            } else {
                N_WIDTH_FALLBACK
            };
            u32::from(n_width)
        })
        .sum();
    n_units as f32 * n_size / 1000.0
}

/// Greedy word wrap into lines no wider than `n_width` points.
///
/// Words wider than the box are broken between characters. Blank lines are
/// dropped.
pub fn wrap_text(text: &str, n_width: f32, font: EnumPdfFont, n_size: f32) -> Vec<String> {
    let mut l_lines = Vec::new();

    for c_paragraph in text.lines() {
        let mut c_line = String::new();
        for c_word in c_paragraph.split_whitespace() {
            let c_candidate = if c_line.is_empty() {
                c_word.to_string()
            } else {
                format!("{c_line} {c_word}")
            };
            if estimate_text_width(&c_candidate, font, n_size) <= n_width {
                c_line = c_candidate;
                continue;
            }

            if !c_line.is_empty() {
                l_lines.push(std::mem::take(&mut c_line));
            }
            if estimate_text_width(c_word, font, n_size) <= n_width {
                c_line = c_word.to_string();
                continue;
            }
            for ch in c_word.chars() {
                let mut c_next = c_line.clone();
                c_next.push(ch);
                if !c_line.is_empty() && estimate_text_width(&c_next, font, n_size) > n_width {
                    l_lines.push(std::mem::take(&mut c_line));
                    c_line.push(ch);
                } else {
                    c_line = c_next;
                }
            }
        }
        if !c_line.is_empty() {
            l_lines.push(c_line);
        }
    }

    l_lines
}

/// Baseline-to-baseline distance for `n_size`.
pub fn derive_line_height(n_size: f32) -> f32 {
    n_size * N_LINE_SPACING
}

/// Height of a padded cell holding `text` wrapped to `n_width_cell`.
///
/// Empty cells still take one line.
pub fn derive_cell_height(text: &str, n_width_cell: f32, font: EnumPdfFont, n_size: f32) -> f32 {
    let n_width_text = f32::max(1.0, n_width_cell - 2.0 * N_CELL_PADDING_PT);
    let n_lines = usize::max(1, wrap_text(text, n_width_text, font, n_size).len());
    n_lines as f32 * derive_line_height(n_size) + 2.0 * N_CELL_PADDING_PT
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RowsAndPages

/// Height of every drawn row, in points.
///
/// Single-row cells size their own row. A spanned cell taller than the rows
/// it covers grows the last covered row by the difference.
pub fn derive_row_heights(
    table_rows: &[SpecPdfTableRow],
    col_widths: &[f32],
    font: EnumPdfFont,
    n_size: f32,
) -> Vec<f32> {
    let n_height_min = derive_cell_height("", f32::MAX, font, n_size);
    let derive_height = |cell: &SpecPdfCell| {
        let n_width = col_widths.get(cell.col_idx).copied().unwrap_or(0.0);
        derive_cell_height(&cell.text, n_width, font, n_size)
    };

    let mut l_heights: Vec<f32> = table_rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .filter(|cell| cell.n_rowspan <= 1)
                .map(derive_height)
                .fold(n_height_min, f32::max)
        })
        .collect();

    for (row_idx, row) in table_rows.iter().enumerate() {
        for cell in row.cells.iter().filter(|cell| cell.n_rowspan > 1) {
            let n_row_end = usize::min(row_idx + cell.n_rowspan, l_heights.len());
            let n_height_covered: f32 = l_heights[row_idx..n_row_end].iter().sum();
            let n_height_needed = derive_height(cell);
            if n_height_needed > n_height_covered {
                l_heights[n_row_end - 1] += n_height_needed - n_height_covered;
            }
        }
    }

    l_heights
}

/// Greedy pagination: fill each page with whole rows until the next one overflows.
///
/// A row taller than a page gets a page of its own. Always returns at least one
/// (possibly empty) page.
pub fn plan_pages(row_heights: &[f32], n_height_available: f32) -> Vec<Range<usize>> {
    let mut l_pages = Vec::new();
    let mut n_row_start = 0;
    let mut n_height_used = 0.0;

    for (row_idx, n_height) in row_heights.iter().enumerate() {
        if row_idx > n_row_start && n_height_used + n_height > n_height_available {
            l_pages.push(n_row_start..row_idx);
            n_row_start = row_idx;
            n_height_used = 0.0;
        }
        n_height_used += n_height;
    }
    l_pages.push(n_row_start..row_heights.len());

    l_pages
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Encoding

/// Encode text for a WinAnsi base-14 font. Unmappable characters become `?`.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\t' | '\n' | '\r' => b' ',
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '•' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::L_PDF_COLUMN_WIDTHS_MM;

    fn create_subject_rows(n_rows: usize) -> Vec<SpecPhysicalRow> {
        (0..n_rows)
            .map(|row_idx| SpecPhysicalRow {
                serial: if row_idx == 0 { "1".to_string() } else { String::new() },
                subject_name: if row_idx == 0 {
                    "Theory of Computation".to_string()
                } else {
                    String::new()
                },
                external_name: format!("Dr. E{row_idx}"),
                permission: "Yes".to_string(),
                if_first_row_of_subject: row_idx == 0,
                n_rows_subject: if row_idx == 0 { n_rows } else { 0 },
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_derive_pdf_table_rows_spans_subject_columns() {
        let l_rows = derive_pdf_table_rows(&create_subject_rows(3), EnumPermissionScope::Subject);

        assert_eq!(l_rows.len(), 3);
        assert_eq!(l_rows[0].cells.len(), 11);
        assert_eq!(l_rows[0].cells[1].text, "Theory of Computation");
        assert_eq!(l_rows[0].cells[1].n_rowspan, 3);
        assert_eq!(l_rows[0].cells[10].n_rowspan, 3);
        assert_eq!(l_rows[0].cells[5].n_rowspan, 1);

        let l_cols: Vec<usize> = l_rows[1].cells.iter().map(|cell| cell.col_idx).collect();
        assert_eq!(l_cols, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_derive_pdf_table_rows_examiner_scope_keeps_permission_per_row() {
        let l_rows = derive_pdf_table_rows(&create_subject_rows(2), EnumPermissionScope::Examiner);

        assert_eq!(l_rows[0].cells[10].n_rowspan, 1);
        let l_cols: Vec<usize> = l_rows[1].cells.iter().map(|cell| cell.col_idx).collect();
        assert_eq!(l_cols, vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_single_row_subject_has_unit_spans() {
        let l_rows = derive_pdf_table_rows(&create_subject_rows(1), EnumPermissionScope::Subject);
        assert!(l_rows[0].cells.iter().all(|cell| cell.n_rowspan == 1));
    }

    #[test]
    fn test_estimate_text_width() {
        let n_narrow = estimate_text_width("iiii", EnumPdfFont::Regular, 10.0);
        let n_wide = estimate_text_width("MMMM", EnumPdfFont::Regular, 10.0);
        assert!((n_narrow - 8.88).abs() < 1e-3);
        assert!(n_wide > n_narrow);
        assert!(
            estimate_text_width("Sl No", EnumPdfFont::Bold, 8.0)
                > estimate_text_width("Sl No", EnumPdfFont::Regular, 8.0)
        );
    }

    #[test]
    fn test_wrap_text_fits_width() {
        let c_text = "Department of Electronics and Telecommunication Engineering, Pune";
        let l_lines = wrap_text(c_text, 80.0, EnumPdfFont::Regular, 8.0);

        assert!(l_lines.len() > 1);
        assert!(
            l_lines
                .iter()
                .all(|line| estimate_text_width(line, EnumPdfFont::Regular, 8.0) <= 80.0)
        );
        assert_eq!(l_lines.join(" "), c_text);
    }

    #[test]
    fn test_wrap_text_breaks_long_words_and_handles_empty() {
        let c_email = "averyveryverylongemailaddress@example.org";
        let l_lines = wrap_text(c_email, 40.0, EnumPdfFont::Regular, 8.0);
        assert!(l_lines.len() > 1);
        assert_eq!(l_lines.concat(), c_email);

        assert!(wrap_text("", 40.0, EnumPdfFont::Regular, 8.0).is_empty());
        assert!(wrap_text("  \n ", 40.0, EnumPdfFont::Regular, 8.0).is_empty());
    }

    #[test]
    fn test_derive_row_heights_grows_last_spanned_row() {
        let l_rows = vec![
            SpecPdfTableRow {
                cells: vec![
                    SpecPdfCell {
                        col_idx: 0,
                        text: "one two three four five six seven eight".to_string(),
                        n_rowspan: 2,
                    },
                    SpecPdfCell {
                        col_idx: 1,
                        text: "a".to_string(),
                        n_rowspan: 1,
                    },
                ],
            },
            SpecPdfTableRow {
                cells: vec![SpecPdfCell {
                    col_idx: 1,
                    text: "b".to_string(),
                    n_rowspan: 1,
                }],
            },
        ];
        let l_widths = [20.0, 100.0];
        let n_line = derive_cell_height("", 100.0, EnumPdfFont::Regular, 8.0);

        let l_heights = derive_row_heights(&l_rows, &l_widths, EnumPdfFont::Regular, 8.0);
        let n_needed =
            derive_cell_height(&l_rows[0].cells[0].text, 20.0, EnumPdfFont::Regular, 8.0);

        assert_eq!(l_heights[0], n_line);
        assert!(n_needed > 2.0 * n_line);
        assert!((l_heights[0] + l_heights[1] - n_needed).abs() < 1e-3);
    }

    #[test]
    fn test_plan_pages_is_greedy() {
        assert_eq!(plan_pages(&[10.0, 10.0, 10.0, 10.0, 10.0], 25.0), vec![0..2, 2..4, 4..5]);
        assert_eq!(plan_pages(&[10.0, 50.0, 10.0], 25.0), vec![0..1, 1..2, 2..3]);
        assert_eq!(plan_pages(&[], 25.0), vec![0..0]);
    }

    #[test]
    fn test_encode_winansi() {
        assert_eq!(encode_winansi("Ab 1"), b"Ab 1".to_vec());
        assert_eq!(encode_winansi("é€\u{2013}"), vec![0xE9, 0x80, 0x96]);
        assert_eq!(encode_winansi("中x"), b"?x".to_vec());
    }

    #[test]
    fn test_validate_column_widths() {
        assert!(validate_column_widths(&L_PDF_COLUMN_WIDTHS_MM).is_ok());
        assert!(matches!(
            validate_column_widths(&[200.0, 77.0]),
            Err(PdfRenderError::ColumnWidth { .. })
        ));
    }
}
