//! Per-subject row counts -> vertical merge spans.

use crate::conf::{L_COLS_SUBJECT_LEVEL, N_COL_PERMISSION};
use crate::spec::{EnumPermissionScope, SpecMergePlan, SpecMergeSpan};

/// Columns carrying subject-level data under `rule_scope`.
///
/// The internal examiner column is per-row data and never appears here.
pub fn derive_merge_columns(rule_scope: EnumPermissionScope) -> Vec<usize> {
    let mut l_cols = L_COLS_SUBJECT_LEVEL.to_vec();
    if rule_scope == EnumPermissionScope::Subject {
        l_cols.push(N_COL_PERMISSION);
    }
    l_cols
}

/// Plan one vertical span per subject-level column for each multi-row subject.
///
/// `row_data_start` is the absolute index of the first data row (header rows
/// precede it). The cursor advances by every subject's row count whether or
/// not that subject produced spans.
pub fn plan_merge_spans(
    subject_row_counts: &[usize],
    row_data_start: usize,
    rule_scope: EnumPermissionScope,
) -> SpecMergePlan {
    let l_cols = derive_merge_columns(rule_scope);
    let mut l_spans = Vec::new();
    let mut n_row_cursor = row_data_start;

    for n_rows_subject in subject_row_counts {
        if *n_rows_subject > 1 {
            let n_row_end = n_row_cursor + n_rows_subject - 1;
            l_spans.extend(l_cols.iter().map(|col_idx| SpecMergeSpan {
                row_start: n_row_cursor,
                row_end: n_row_end,
                col_start: *col_idx,
                col_end: *col_idx,
            }));
        }
        n_row_cursor += n_rows_subject;
    }

    SpecMergePlan {
        spans: l_spans,
        row_cursor_end: n_row_cursor,
    }
}
