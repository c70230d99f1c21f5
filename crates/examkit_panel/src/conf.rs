//! Panel layout constants and validation thresholds.

/// Number of output columns in every panel document.
pub const N_PANEL_COLUMNS: usize = 11;

/// Fixed column order shared by the grid and paginated renderers.
pub const L_PANEL_COLUMN_TITLES: [&str; N_PANEL_COLUMNS] = [
    "Sl No",
    "Subject",
    "Subject Code",
    "Semester",
    "Number of Students",
    "Internal Examiner",
    "Name",
    "Address",
    "Contact Number",
    "Email ID",
    "Permission to use existing QP",
];

pub const N_COL_SERIAL: usize = 0;
pub const N_COL_SUBJECT_NAME: usize = 1;
pub const N_COL_SUBJECT_CODE: usize = 2;
pub const N_COL_SEMESTER: usize = 3;
pub const N_COL_STUDENTS: usize = 4;
/// Internal examiner column. Never merged.
pub const N_COL_INTERNAL: usize = 5;
pub const N_COL_EXTERNAL_NAME: usize = 6;
pub const N_COL_EXTERNAL_ADDRESS: usize = 7;
pub const N_COL_EXTERNAL_CONTACT: usize = 8;
pub const N_COL_EXTERNAL_EMAIL: usize = 9;
pub const N_COL_PERMISSION: usize = 10;

/// First column (inclusive) under the "External Examiner" banner.
pub const N_COL_EXTERNAL_GROUP_START: usize = N_COL_EXTERNAL_NAME;
/// Last column (inclusive) under the "External Examiner" banner.
pub const N_COL_EXTERNAL_GROUP_END: usize = N_COL_PERMISSION;

/// Banner text over the external examiner column group.
pub const C_EXTERNAL_GROUP_LABEL: &str = "External Examiner";

/// Subject-level columns merged in every permission scope.
pub const L_COLS_SUBJECT_LEVEL: [usize; 5] = [
    N_COL_SERIAL,
    N_COL_SUBJECT_NAME,
    N_COL_SUBJECT_CODE,
    N_COL_SEMESTER,
    N_COL_STUDENTS,
];

/// Required digit count of a normalized contact number.
pub const N_CONTACT_DIGITS: usize = 10;
/// Minimum years of experience for an external examiner (subject-level permission scope).
pub const N_YEARS_EXPERIENCE_MIN: f64 = 3.0;

/// `local@domain.tld` shape check.
pub const C_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Accepted permission values.
pub const TUP_PERMISSION_VALUES: [&str; 2] = ["Yes", "No"];
