//! Collect-all validation of subject records before layout.

use std::sync::LazyLock;

use regex::Regex;

use crate::conf::{C_EMAIL_PATTERN, N_CONTACT_DIGITS, N_YEARS_EXPERIENCE_MIN, TUP_PERMISSION_VALUES};
use crate::spec::{EnumPermissionScope, SpecExternalExaminer, SpecSubjectRecord};

static RE_EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(C_EMAIL_PATTERN).ok());

/// Validate `records` and return every problem found, in rule order.
///
/// An empty result means the records are safe to expand and render. Records
/// are labelled `Subject #<n>` by their 1-based position.
pub fn validate_subject_records(
    records: &[SpecSubjectRecord],
    rule_scope: EnumPermissionScope,
) -> Vec<String> {
    let mut l_errors = Vec::new();
    if records.is_empty() {
        l_errors.push("At least one subject is required to export.".to_string());
        return l_errors;
    }

    for (n_idx_subject, record) in records.iter().enumerate() {
        let c_subject = format!("Subject #{}", n_idx_subject + 1);

        for (c_value, c_field) in [
            (&record.subject_name, "Subject Name"),
            (&record.subject_code, "Subject Code"),
            (&record.semester, "Semester"),
            (&record.students_enrolled, "Number of Students"),
        ] {
            if is_blank(c_value) {
                l_errors.push(format!("{c_subject}: {c_field} is required."));
            }
        }

        if rule_scope == EnumPermissionScope::Subject
            && let Some(c_msg) = validate_permission(&record.verification)
        {
            l_errors.push(format!("{c_subject}: {c_msg}"));
        }

        for (n_idx, internal) in record.internals.iter().enumerate() {
            if is_blank(&internal.name) {
                l_errors.push(format!(
                    "{c_subject}, Internal Examiner #{}: Name is required.",
                    n_idx + 1
                ));
            }
        }

        for (n_idx, external) in record.externals.iter().enumerate() {
            let c_prefix = format!("{c_subject}, External Examiner #{}", n_idx + 1);
            for c_msg in validate_external_examiner(external, rule_scope) {
                l_errors.push(format!("{c_prefix}: {c_msg}"));
            }
        }
    }

    if !l_errors.is_empty() {
        log::debug!(
            "validation found {} problem(s) across {} subject(s)",
            l_errors.len(),
            records.len()
        );
    }
    l_errors
}

fn validate_external_examiner(
    external: &SpecExternalExaminer,
    rule_scope: EnumPermissionScope,
) -> Vec<String> {
    let mut l_msgs = Vec::new();

    if is_blank(&external.name) {
        l_msgs.push("Name is required.".to_string());
    }
    if is_blank(&external.address) {
        l_msgs.push("Address is required.".to_string());
    }

    if is_blank(&external.contact) {
        l_msgs.push("Contact Number is required.".to_string());
    } else if normalize_contact_digits(&external.contact).len() != N_CONTACT_DIGITS {
        l_msgs.push(format!(
            "Contact Number must be exactly {N_CONTACT_DIGITS} digits."
        ));
    }

    if is_blank(&external.email) {
        l_msgs.push("Email ID is required.".to_string());
    } else if !is_valid_email(&external.email) {
        l_msgs.push("Email ID has an invalid email format.".to_string());
    }

    match rule_scope {
        EnumPermissionScope::Subject => {
            if let Some(c_msg) = validate_years_of_experience(&external.years_of_experience) {
                l_msgs.push(c_msg);
            }
        }
        EnumPermissionScope::Examiner => {
            if let Some(c_msg) = validate_permission(&external.verification) {
                l_msgs.push(c_msg);
            }
        }
    }

    l_msgs
}

fn validate_permission(value: &str) -> Option<String> {
    let c_value = value.trim();
    if c_value.is_empty() {
        return Some("Permission (Yes/No) is required.".to_string());
    }
    if !TUP_PERMISSION_VALUES.contains(&c_value) {
        return Some(r#"Permission must be either "Yes" or "No"."#.to_string());
    }
    None
}

fn validate_years_of_experience(value: &str) -> Option<String> {
    let c_value = value.trim();
    if c_value.is_empty() {
        return Some("Years of Experience is required.".to_string());
    }
    match c_value.parse::<f64>() {
        Ok(n_years) if n_years.is_finite() => {
            if n_years < N_YEARS_EXPERIENCE_MIN {
                Some(format!(
                    "Years of Experience must be at least {N_YEARS_EXPERIENCE_MIN} years."
                ))
            } else {
                None
            }
        }
        _ => Some("Years of Experience must be a number.".to_string()),
    }
}

/// Strip every non-digit character.
pub fn normalize_contact_digits(contact: &str) -> String {
    contact.chars().filter(char::is_ascii_digit).collect()
}

/// Check the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL
        .as_ref()
        .is_some_and(|re_email| re_email.is_match(email.trim()))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
