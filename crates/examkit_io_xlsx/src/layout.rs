//! Panel rows and spans -> format-independent grid documents.

use examkit_panel::{
    C_EXTERNAL_GROUP_LABEL, L_PANEL_COLUMN_TITLES, N_COL_EXTERNAL_GROUP_END,
    N_COL_EXTERNAL_GROUP_START, N_PANEL_COLUMNS, SpecMergeSpan, SpecPhysicalRow,
    SpecUnfilledSubject,
};

use crate::conf::{
    C_SHEET_NAME_PANEL, C_SHEET_NAME_UNFILLED, L_PANEL_COLUMN_WIDTHS, L_UNFILLED_COLUMN_TITLES,
    L_UNFILLED_COLUMN_WIDTHS, N_HEIGHT_TITLE_ROW, N_ROW_DATA_START,
};
use crate::spec::{EnumGridBand, SpecGridDocument};
use crate::util::{apply_grid_presentation, apply_merge_text_blankout, plan_header_merges};

/// Lay out the panel sheet.
///
/// Rows 0..3 hold the title, the external-group banner, and column names;
/// `rows` follow from [`N_ROW_DATA_START`]. `spans` must already be in
/// absolute sheet coordinates.
pub fn derive_panel_grid(
    rows: &[SpecPhysicalRow],
    spans: &[SpecMergeSpan],
    title: &str,
) -> SpecGridDocument {
    let mut doc = SpecGridDocument::new(C_SHEET_NAME_PANEL, N_PANEL_COLUMNS);

    let l_banner_row: Vec<String> = (0..N_PANEL_COLUMNS)
        .map(|col_idx| {
            if (N_COL_EXTERNAL_GROUP_START..=N_COL_EXTERNAL_GROUP_END).contains(&col_idx) {
                C_EXTERNAL_GROUP_LABEL.to_string()
            } else {
                String::new()
            }
        })
        .collect();
    let mut l_header_grid = vec![
        vec![title.to_string(); N_PANEL_COLUMNS],
        l_banner_row,
        L_PANEL_COLUMN_TITLES.map(String::from).to_vec(),
    ];
    let l_header_merges = plan_header_merges(&l_header_grid, 0);
    apply_merge_text_blankout(&mut l_header_grid, &l_header_merges, 0);

    for (row_idx, row_values) in l_header_grid.into_iter().enumerate() {
        let band = if row_idx + 1 == N_ROW_DATA_START {
            EnumGridBand::Header
        } else {
            EnumGridBand::Title
        };
        doc.push_row(row_idx, row_values, band);
    }

    for (n_idx_row, row) in rows.iter().enumerate() {
        doc.push_row(N_ROW_DATA_START + n_idx_row, row.to_cells(), EnumGridBand::Body);
    }

    doc.merges = l_header_merges;
    doc.merges.extend_from_slice(spans);
    doc.col_widths = L_PANEL_COLUMN_WIDTHS.to_vec();
    doc.row_heights.insert(0, N_HEIGHT_TITLE_ROW);
    doc.row_freeze = Some(N_ROW_DATA_START);

    apply_grid_presentation(&mut doc);
    log::debug!(
        "panel grid: {} row(s) x {} column(s), {} merge(s)",
        doc.n_rows,
        doc.n_cols,
        doc.merges.len()
    );
    doc
}

/// Lay out the appendix sheet of subjects that have no panel yet.
///
/// Every subject is a single row, so only the title is merged.
pub fn derive_unfilled_grid(unfilled: &[SpecUnfilledSubject], title: &str) -> SpecGridDocument {
    let n_cols = L_UNFILLED_COLUMN_TITLES.len();
    let mut doc = SpecGridDocument::new(C_SHEET_NAME_UNFILLED, n_cols);

    let mut l_header_grid = vec![
        vec![title.to_string(); n_cols],
        L_UNFILLED_COLUMN_TITLES.map(String::from).to_vec(),
    ];
    let l_header_merges = plan_header_merges(&l_header_grid, 0);
    apply_merge_text_blankout(&mut l_header_grid, &l_header_merges, 0);

    let n_rows_header = l_header_grid.len();
    for (row_idx, row_values) in l_header_grid.into_iter().enumerate() {
        let band = if row_idx == 0 {
            EnumGridBand::Title
        } else {
            EnumGridBand::Header
        };
        doc.push_row(row_idx, row_values, band);
    }

    for (n_idx, subject) in unfilled.iter().enumerate() {
        doc.push_row(
            n_rows_header + n_idx,
            [
                (n_idx + 1).to_string(),
                subject.subject_name.clone(),
                subject.subject_code.clone(),
                subject.semester.clone(),
            ],
            EnumGridBand::Body,
        );
    }

    doc.merges = l_header_merges;
    doc.col_widths = L_UNFILLED_COLUMN_WIDTHS.to_vec();
    doc.row_heights.insert(0, N_HEIGHT_TITLE_ROW);
    doc.row_freeze = Some(n_rows_header);

    apply_grid_presentation(&mut doc);
    doc
}
