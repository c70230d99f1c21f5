use chrono::NaiveDate;
use examkit_export::{
    ExportError, SpecExportArtifact, SpecExportOptions, SpecPdfHeaderBlock, SpecUnfilledSubject,
    export_grid, export_grid_with_appendix, export_paginated, parse_rule_permission_scope,
    parse_subject_records_json,
};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "examkit.export.v1";
const C_BRIDGE_TRANSPORT: &str = "json";
const C_FORMAT_DATE_ARG: &str = "%Y-%m-%d";

type PyArtifact<'py> = (String, Bound<'py, PyBytes>);

#[pyfunction(name = "export_grid")]
#[pyo3(signature = (
    records_json,
    count,
    title,
    rule_permission_scope = "subject",
    date_export = None
))]
fn export_grid_py<'py>(
    py: Python<'py>,
    records_json: &str,
    count: usize,
    title: &str,
    rule_permission_scope: &str,
    date_export: Option<&str>,
) -> PyResult<PyArtifact<'py>> {
    let dict_records = parse_subject_records_json(records_json).map_err(PyValueError::new_err)?;
    let options = derive_export_options(rule_permission_scope, date_export, None, None, None)?;

    let result = py.allow_threads(|| export_grid(&dict_records, count, title, &options));
    derive_py_artifact(py, result)
}

#[pyfunction(name = "export_paginated")]
#[pyo3(signature = (
    records_json,
    count,
    title,
    rule_permission_scope = "subject",
    date_export = None,
    institution = None,
    department = None,
    logo = None
))]
#[allow(clippy::too_many_arguments)]
fn export_paginated_py<'py>(
    py: Python<'py>,
    records_json: &str,
    count: usize,
    title: &str,
    rule_permission_scope: &str,
    date_export: Option<&str>,
    institution: Option<String>,
    department: Option<String>,
    logo: Option<Vec<u8>>,
) -> PyResult<PyArtifact<'py>> {
    let dict_records = parse_subject_records_json(records_json).map_err(PyValueError::new_err)?;
    let options = derive_export_options(
        rule_permission_scope,
        date_export,
        institution,
        department,
        logo,
    )?;

    let result = py.allow_threads(|| export_paginated(&dict_records, count, title, &options));
    derive_py_artifact(py, result)
}

#[pyfunction(name = "export_grid_with_appendix")]
#[pyo3(signature = (
    records_json,
    count,
    unfilled_json,
    semester_label,
    title,
    rule_permission_scope = "subject",
    date_export = None
))]
#[allow(clippy::too_many_arguments)]
fn export_grid_with_appendix_py<'py>(
    py: Python<'py>,
    records_json: &str,
    count: usize,
    unfilled_json: &str,
    semester_label: &str,
    title: &str,
    rule_permission_scope: &str,
    date_export: Option<&str>,
) -> PyResult<PyArtifact<'py>> {
    let dict_records = parse_subject_records_json(records_json).map_err(PyValueError::new_err)?;
    let l_unfilled: Vec<SpecUnfilledSubject> = serde_json::from_str(unfilled_json)
        .map_err(|err| PyValueError::new_err(format!("invalid unfilled subjects: {err}")))?;
    let options = derive_export_options(rule_permission_scope, date_export, None, None, None)?;

    let result = py.allow_threads(|| {
        export_grid_with_appendix(
            &dict_records,
            count,
            &l_unfilled,
            semester_label,
            title,
            &options,
        )
    });
    derive_py_artifact(py, result)
}

fn derive_export_options(
    rule_permission_scope: &str,
    date_export: Option<&str>,
    institution: Option<String>,
    department: Option<String>,
    logo: Option<Vec<u8>>,
) -> PyResult<SpecExportOptions> {
    let mut options = SpecExportOptions {
        rule_permission_scope: parse_rule_permission_scope(rule_permission_scope)
            .map_err(PyValueError::new_err)?,
        pdf_logo: logo,
        ..Default::default()
    };

    if let Some(c_date) = date_export {
        options.date_export = NaiveDate::parse_from_str(c_date, C_FORMAT_DATE_ARG).map_err(
            |err| PyValueError::new_err(format!("Invalid date_export {c_date:?}: {err}")),
        )?;
    }

    let header_default = SpecPdfHeaderBlock::default();
    options.pdf_header = SpecPdfHeaderBlock {
        institution: institution.unwrap_or(header_default.institution),
        department: department.unwrap_or(header_default.department),
    };

    Ok(options)
}

fn derive_py_artifact(
    py: Python<'_>,
    result: Result<SpecExportArtifact, ExportError>,
) -> PyResult<PyArtifact<'_>> {
    match result {
        Ok(artifact) => Ok((artifact.file_name, PyBytes::new(py, &artifact.bytes))),
        Err(ExportError::Validation(l_errors)) => Err(PyValueError::new_err(l_errors)),
        Err(err @ ExportError::Rendering(_)) => Err(PyRuntimeError::new_err(err.to_string())),
    }
}

#[pymodule]
fn _examkit_rs(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(export_grid_py, module)?)?;
    module.add_function(wrap_pyfunction!(export_paginated_py, module)?)?;
    module.add_function(wrap_pyfunction!(export_grid_with_appendix_py, module)?)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    module.add("__bridge_transport__", C_BRIDGE_TRANSPORT)?;
    Ok(())
}
