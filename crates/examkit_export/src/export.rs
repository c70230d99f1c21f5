//! Validate -> expand -> span -> render.

use std::collections::BTreeMap;

use examkit_io_pdf::{SpecPdfWriteOptions, render_paginated};
use examkit_io_xlsx::{N_ROW_DATA_START, XlsxWriter, derive_panel_grid, derive_unfilled_grid};
use examkit_panel::{
    SpecRowExpansion, SpecSubjectRecord, SpecUnfilledSubject, expand_subject_records,
    plan_merge_spans, select_subject_records, validate_subject_records,
};

use crate::conf::{
    C_FILE_EXTENSION_GRID, C_FILE_NAME_APPENDIX_PREFIX, C_FILE_NAME_GRID, C_FILE_NAME_PAGINATED,
    C_LABEL_PLACEHOLDER, C_TITLE_APPENDIX_PREFIX,
};
use crate::spec::{EnumExportVariant, ExportError, SpecExportArtifact, SpecExportOptions};

/// Export the first `n_subjects` records as a one-sheet workbook.
pub fn export_grid(
    dict_records: &BTreeMap<usize, SpecSubjectRecord>,
    n_subjects: usize,
    title: &str,
    options: &SpecExportOptions,
) -> Result<SpecExportArtifact, ExportError> {
    export_panel(dict_records, n_subjects, title, EnumExportVariant::Grid, options)
}

/// Export the first `n_subjects` records as a paginated PDF.
pub fn export_paginated(
    dict_records: &BTreeMap<usize, SpecSubjectRecord>,
    n_subjects: usize,
    title: &str,
    options: &SpecExportOptions,
) -> Result<SpecExportArtifact, ExportError> {
    export_panel(
        dict_records,
        n_subjects,
        title,
        EnumExportVariant::Paginated,
        options,
    )
}

/// Export the panel workbook plus an "Unfilled Subjects" sheet.
pub fn export_grid_with_appendix(
    dict_records: &BTreeMap<usize, SpecSubjectRecord>,
    n_subjects: usize,
    unfilled: &[SpecUnfilledSubject],
    semester_label: &str,
    title: &str,
    options: &SpecExportOptions,
) -> Result<SpecExportArtifact, ExportError> {
    export_panel(
        dict_records,
        n_subjects,
        title,
        EnumExportVariant::GridWithAppendix {
            unfilled,
            semester_label,
        },
        options,
    )
}

/// Shared pipeline behind every export entry point.
///
/// Validation runs first and is all-or-nothing: any error returns
/// [`ExportError::Validation`] with the complete list and nothing is rendered.
pub fn export_panel(
    dict_records: &BTreeMap<usize, SpecSubjectRecord>,
    n_subjects: usize,
    title: &str,
    variant: EnumExportVariant<'_>,
    options: &SpecExportOptions,
) -> Result<SpecExportArtifact, ExportError> {
    let l_records = select_subject_records(dict_records, n_subjects);
    let l_errors = validate_subject_records(&l_records, options.rule_permission_scope);
    if !l_errors.is_empty() {
        log::warn!(
            "export rejected: {} validation error(s) across {n_subjects} subject(s)",
            l_errors.len()
        );
        return Err(ExportError::Validation(l_errors));
    }

    let expansion = expand_subject_records(&l_records, options.rule_permission_scope);
    let artifact = match variant {
        EnumExportVariant::Grid => SpecExportArtifact {
            file_name: C_FILE_NAME_GRID.to_string(),
            bytes: render_grid_workbook(&expansion, title, None, options)?,
        },
        EnumExportVariant::Paginated => {
            let pdf_options = SpecPdfWriteOptions {
                header: options.pdf_header.clone(),
                logo: options.pdf_logo.clone(),
                date_footer: options.date_export,
                rule_permission_scope: options.rule_permission_scope,
            };
            SpecExportArtifact {
                file_name: C_FILE_NAME_PAGINATED.to_string(),
                bytes: render_paginated(&expansion.rows, title, &pdf_options)?,
            }
        }
        EnumExportVariant::GridWithAppendix {
            unfilled,
            semester_label,
        } => SpecExportArtifact {
            file_name: derive_appendix_file_name(semester_label),
            bytes: render_grid_workbook(
                &expansion,
                title,
                Some((unfilled, semester_label)),
                options,
            )?,
        },
    };

    log::info!(
        "exported {}: {} subject(s), {} row(s), {} byte(s)",
        artifact.file_name,
        n_subjects,
        expansion.rows.len(),
        artifact.bytes.len()
    );
    Ok(artifact)
}

/// `Panel_of_Examiners_Semester_<label>.xlsx` with the label reduced to `[A-Za-z0-9_-]`.
pub fn derive_appendix_file_name(semester_label: &str) -> String {
    let c_label: String = semester_label
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let c_label = if c_label.trim_matches('_').is_empty() {
        C_LABEL_PLACEHOLDER.to_string()
    } else {
        c_label
    };
    format!("{C_FILE_NAME_APPENDIX_PREFIX}{c_label}.{C_FILE_EXTENSION_GRID}")
}

fn render_grid_workbook(
    expansion: &SpecRowExpansion,
    title: &str,
    appendix: Option<(&[SpecUnfilledSubject], &str)>,
    options: &SpecExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let plan = plan_merge_spans(
        &expansion.subject_row_counts,
        N_ROW_DATA_START,
        options.rule_permission_scope,
    );

    let mut writer = XlsxWriter::default();
    writer
        .set_creation_date(options.date_export)
        .map_err(ExportError::Rendering)?;
    writer
        .write_grid(&derive_panel_grid(&expansion.rows, &plan.spans, title))
        .map_err(ExportError::Rendering)?;
    if let Some((unfilled, semester_label)) = appendix {
        let c_title = format!("{C_TITLE_APPENDIX_PREFIX}{semester_label}");
        writer
            .write_grid(&derive_unfilled_grid(unfilled, &c_title))
            .map_err(ExportError::Rendering)?;
    }

    for c_warning in writer.report().warnings {
        log::warn!("{c_warning}");
    }
    writer.save_to_buffer().map_err(ExportError::Rendering)
}
