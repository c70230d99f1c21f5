//! `examkit`: render a panel-of-examiners request file to XLSX or PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use thiserror::Error;

use examkit_export::{
    ExportError, SpecExportArtifact, SpecExportOptions, SpecExportRequest, SpecPdfHeaderBlock,
    export_grid, export_grid_with_appendix, export_paginated, parse_rule_permission_scope,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EnumOutputFormat {
    /// One-sheet workbook.
    Xlsx,
    /// Paginated A4 landscape document.
    Pdf,
    /// Workbook plus an "Unfilled Subjects" sheet.
    XlsxAppendix,
}

#[derive(Debug, Parser)]
#[command(name = "examkit", version, about = "Render panel-of-examiners documents")]
struct Cli {
    /// JSON request file with `title`, `records`, and optional `count`,
    /// `unfilledSubjects`, `semesterLabel`.
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = EnumOutputFormat::Xlsx)]
    format: EnumOutputFormat,

    /// Output file, or directory to place the default file name in.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Export date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Permission scope: `subject` or `examiner`.
    #[arg(long, default_value = "subject")]
    scope: String,

    #[arg(long)]
    institution: Option<String>,

    #[arg(long)]
    department: Option<String>,

    /// PNG or JPEG logo for the PDF header.
    #[arg(long)]
    logo: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Request(String),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(path_out) => {
            log::info!("wrote {}", path_out.display());
            ExitCode::SUCCESS
        }
        Err(CliError::Export(ExportError::Validation(l_errors))) => {
            log::error!("{} validation error(s):", l_errors.len());
            for c_error in l_errors {
                eprintln!("  - {c_error}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let request =
        SpecExportRequest::from_json(&read_text(&cli.input)?).map_err(CliError::Request)?;
    let options = derive_export_options(cli)?;

    let c_title = request.title.clone();
    let l_unfilled = request.unfilled_subjects.clone();
    let c_semester_label = request.semester_label.clone().unwrap_or_default();
    let (dict_records, n_subjects) = request.into_records().map_err(CliError::Request)?;

    let artifact: SpecExportArtifact = match cli.format {
        EnumOutputFormat::Xlsx => export_grid(&dict_records, n_subjects, &c_title, &options)?,
        EnumOutputFormat::Pdf => export_paginated(&dict_records, n_subjects, &c_title, &options)?,
        EnumOutputFormat::XlsxAppendix => export_grid_with_appendix(
            &dict_records,
            n_subjects,
            &l_unfilled,
            &c_semester_label,
            &c_title,
            &options,
        )?,
    };

    let path_out = derive_output_path(cli.output.as_deref(), &artifact.file_name);
    fs::write(&path_out, &artifact.bytes).map_err(|source| CliError::Io {
        path: path_out.clone(),
        source,
    })?;
    Ok(path_out)
}

fn derive_export_options(cli: &Cli) -> Result<SpecExportOptions, CliError> {
    let header_default = SpecPdfHeaderBlock::default();
    let pdf_logo = match &cli.logo {
        Some(path_logo) => Some(fs::read(path_logo).map_err(|source| CliError::Io {
            path: path_logo.clone(),
            source,
        })?),
        None => None,
    };

    let mut options = SpecExportOptions {
        rule_permission_scope: parse_rule_permission_scope(&cli.scope)
            .map_err(CliError::Request)?,
        pdf_header: SpecPdfHeaderBlock {
            institution: cli
                .institution
                .clone()
                .unwrap_or(header_default.institution),
            department: cli.department.clone().unwrap_or(header_default.department),
        },
        pdf_logo,
        ..Default::default()
    };
    if let Some(date) = cli.date {
        options.date_export = date;
    }
    Ok(options)
}

/// `output` itself, `output/<file_name>` when it is a directory, or `file_name`.
fn derive_output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_REQUEST_VALID: &str = r#"{
        "title": "Panel of Examiners - Nov 2026",
        "records": [{
            "subjectName": "Operating Systems",
            "subjectCode": "CS401",
            "semester": "IV",
            "studentsEnrolled": 58,
            "verification": "No",
            "internals": [{"name": "Dr. A"}],
            "externals": [{
                "name": "Dr. B",
                "address": "VJTI, Mumbai",
                "contact": "98200 12345",
                "email": "b@vjti.ac.in",
                "yearsOfExperience": 12
            }]
        }],
        "unfilledSubjects": [{"subjectName": "AI", "subjectCode": "CS601", "semester": "IV"}],
        "semesterLabel": "IV"
    }"#;

    fn create_cli(input: PathBuf, format: EnumOutputFormat, output: Option<PathBuf>) -> Cli {
        Cli {
            input,
            format,
            output,
            date: NaiveDate::from_ymd_opt(2026, 10, 16),
            scope: "subject".to_string(),
            institution: None,
            department: None,
            logo: None,
        }
    }

    #[test]
    fn test_cli_args_parse() {
        let cli = Cli::try_parse_from([
            "examkit",
            "request.json",
            "--format",
            "xlsx-appendix",
            "--date",
            "2026-10-16",
            "--scope",
            "examiner",
        ])
        .expect("args");

        assert_eq!(cli.format, EnumOutputFormat::XlsxAppendix);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 10, 16));
        assert_eq!(cli.scope, "examiner");
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_derive_output_path() {
        let dir_tmp = tempfile::tempdir().expect("tempdir");

        assert_eq!(
            derive_output_path(Some(dir_tmp.path()), "Panel_of_Examiners.pdf"),
            dir_tmp.path().join("Panel_of_Examiners.pdf")
        );
        assert_eq!(
            derive_output_path(Some(Path::new("out/panel.xlsx")), "Panel_of_Examiners.xlsx"),
            PathBuf::from("out/panel.xlsx")
        );
        assert_eq!(
            derive_output_path(None, "Panel_of_Examiners.xlsx"),
            PathBuf::from("Panel_of_Examiners.xlsx")
        );
    }

    #[test]
    fn test_run_writes_each_format() {
        let dir_tmp = tempfile::tempdir().expect("tempdir");
        let path_request = dir_tmp.path().join("request.json");
        fs::write(&path_request, C_REQUEST_VALID).expect("write request");

        for (format, c_file_name, c_magic) in [
            (EnumOutputFormat::Xlsx, "Panel_of_Examiners.xlsx", &b"PK"[..]),
            (EnumOutputFormat::Pdf, "Panel_of_Examiners.pdf", &b"%PDF-"[..]),
            (
                EnumOutputFormat::XlsxAppendix,
                "Panel_of_Examiners_Semester_IV.xlsx",
                &b"PK"[..],
            ),
        ] {
            let cli = create_cli(
                path_request.clone(),
                format,
                Some(dir_tmp.path().to_path_buf()),
            );
            let path_out = run(&cli).expect("run");

            assert_eq!(path_out, dir_tmp.path().join(c_file_name));
            assert!(fs::read(&path_out).expect("read output").starts_with(c_magic));
        }
    }

    #[test]
    fn test_run_reports_validation_errors() {
        let dir_tmp = tempfile::tempdir().expect("tempdir");
        let path_request = dir_tmp.path().join("request.json");
        fs::write(
            &path_request,
            r#"{"title": "Panel", "records": {"0": {"subjectCode": "CS401"}}}"#,
        )
        .expect("write request");

        let cli = create_cli(
            path_request,
            EnumOutputFormat::Xlsx,
            Some(dir_tmp.path().to_path_buf()),
        );
        match run(&cli) {
            Err(CliError::Export(ExportError::Validation(l_errors))) => {
                assert!(l_errors.contains(&"Subject #1: Subject Name is required.".to_string()));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(!dir_tmp.path().join("Panel_of_Examiners.xlsx").exists());
    }

    #[test]
    fn test_run_reports_missing_input() {
        let cli = create_cli(
            PathBuf::from("/nonexistent/request.json"),
            EnumOutputFormat::Pdf,
            None,
        );
        assert!(matches!(run(&cli), Err(CliError::Io { .. })));
    }
}
