//! Export file names and appendix labels.

pub const C_FILE_NAME_GRID: &str = "Panel_of_Examiners.xlsx";
pub const C_FILE_NAME_PAGINATED: &str = "Panel_of_Examiners.pdf";
/// Appendix workbook: `<prefix><label>.xlsx`.
pub const C_FILE_NAME_APPENDIX_PREFIX: &str = "Panel_of_Examiners_Semester_";
pub const C_FILE_EXTENSION_GRID: &str = "xlsx";

/// Appendix sheet title: `<prefix><label>`.
pub const C_TITLE_APPENDIX_PREFIX: &str = "Unfilled Subjects - Semester ";

/// Stand-in for a semester label with no file-name-safe characters.
pub const C_LABEL_PLACEHOLDER: &str = "Unlabelled";
