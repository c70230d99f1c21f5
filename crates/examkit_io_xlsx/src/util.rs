//! Stateless helper utilities used by the grid layout and writer.

use std::collections::BTreeSet;

use examkit_panel::SpecMergeSpan;

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::{EnumGridBand, SpecGridCell, SpecGridDocument};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region HeaderMergeUtils

/// Plan horizontal merges for repeated non-empty header text per row.
///
/// `row_offset` shifts grid-local row indices to absolute sheet rows.
pub fn plan_header_merges(header_grid: &[Vec<String>], row_offset: usize) -> Vec<SpecMergeSpan> {
    let mut l_merges = Vec::new();

    for (row_idx, v_str_current_row) in header_grid.iter().enumerate() {
        let n_cols = v_str_current_row.len();
        let mut n_col_idx = 0;

        while n_col_idx < n_cols {
            let c_cell_val = &v_str_current_row[n_col_idx];
            if c_cell_val.is_empty() {
                n_col_idx += 1;
                continue;
            }

            let mut n_col_idx_end = n_col_idx + 1;
            while n_col_idx_end < n_cols && v_str_current_row[n_col_idx_end] == *c_cell_val {
                n_col_idx_end += 1;
            }

            if n_col_idx_end - n_col_idx > 1 {
                l_merges.push(SpecMergeSpan {
                    row_start: row_offset + row_idx,
                    row_end: row_offset + row_idx,
                    col_start: n_col_idx,
                    col_end: n_col_idx_end - 1,
                });
            }
            n_col_idx = n_col_idx_end;
        }
    }

    l_merges
}

/// Clear repeated header text inside each merge, keeping the anchor text.
pub fn apply_merge_text_blankout(
    header_grid: &mut [Vec<String>],
    merges: &[SpecMergeSpan],
    row_offset: usize,
) {
    for merge in merges {
        let Some(row) = merge
            .row_start
            .checked_sub(row_offset)
            .and_then(|row_idx| header_grid.get_mut(row_idx))
        else {
            continue;
        };
        for cell in row
            .iter_mut()
            .take(merge.col_end + 1)
            .skip(merge.col_start + 1)
        {
            cell.clear();
        }
    }
}

/// Cells covered by a merge, excluding each merge's top-left anchor.
pub fn derive_merge_tracker(merges: &[SpecMergeSpan]) -> BTreeSet<(usize, usize)> {
    let mut set_covered = BTreeSet::new();
    for merge in merges {
        for row_idx in merge.row_start..=merge.row_end {
            for col_idx in merge.col_start..=merge.col_end {
                if !merge.is_anchor(row_idx, col_idx) {
                    set_covered.insert((row_idx, col_idx));
                }
            }
        }
    }
    set_covered
}

/// Reject merges that overlap, cover a single cell, or fall outside the occupied range.
pub fn validate_merge_spans(
    merges: &[SpecMergeSpan],
    n_rows: usize,
    n_cols: usize,
) -> Result<(), String> {
    let mut set_seen = BTreeSet::new();
    for merge in merges {
        if merge.row_start > merge.row_end || merge.col_start > merge.col_end {
            return Err(format!("Inverted merge range: {merge:?}"));
        }
        if merge.row_start == merge.row_end && merge.col_start == merge.col_end {
            return Err(format!("Single-cell merge range: {merge:?}"));
        }
        if merge.row_end >= n_rows || merge.col_end >= n_cols {
            return Err(format!(
                "Merge range {merge:?} exceeds occupied range {n_rows}x{n_cols}."
            ));
        }
        for row_idx in merge.row_start..=merge.row_end {
            for col_idx in merge.col_start..=merge.col_end {
                if !set_seen.insert((row_idx, col_idx)) {
                    return Err(format!(
                        "Overlapping merge ranges at row {row_idx}, column {col_idx}."
                    ));
                }
            }
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Presentation

/// Materialize every coordinate in the occupied rectangle.
///
/// Styling is cell-attached in XLSX, so blanks must exist as cells for the
/// borders to stay continuous. Missing cells take their row's band.
pub fn apply_grid_presentation(doc: &mut SpecGridDocument) {
    for row_idx in 0..doc.n_rows {
        let band = doc
            .row_bands
            .get(&row_idx)
            .copied()
            .unwrap_or(EnumGridBand::Body);
        for col_idx in 0..doc.n_cols {
            doc.cells
                .entry((row_idx, col_idx))
                .or_insert_with(|| SpecGridCell {
                    text: String::new(),
                    band,
                });
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
