//! Subject records -> flattened physical rows.

use std::collections::BTreeMap;

use crate::spec::{
    EnumPermissionScope, SpecExternalExaminer, SpecPhysicalRow, SpecRowExpansion,
    SpecSubjectRecord,
};

/// Read indices `0..n_subjects` from a sparse index map.
///
/// Entries beyond `n_subjects` are ignored; missing indices become empty
/// records, which the validator then reports.
pub fn select_subject_records(
    dict_records: &BTreeMap<usize, SpecSubjectRecord>,
    n_subjects: usize,
) -> Vec<SpecSubjectRecord> {
    (0..n_subjects)
        .map(|n_idx| dict_records.get(&n_idx).cloned().unwrap_or_default())
        .collect()
}

/// Flatten subjects into physical rows, in subject order.
///
/// Each subject yields `max(internals, externals, 1)` rows. Subject-level
/// fields (and the serial number) land on the first row only; continuation
/// rows keep empty strings in those columns. Missing examiners on the shorter
/// side render as empty cells.
pub fn expand_subject_records(
    records: &[SpecSubjectRecord],
    rule_scope: EnumPermissionScope,
) -> SpecRowExpansion {
    let mut l_rows = Vec::new();
    let mut l_subject_row_counts = Vec::with_capacity(records.len());
    let external_empty = SpecExternalExaminer::default();

    for (n_idx_subject, record) in records.iter().enumerate() {
        let n_rows_subject = record.row_count();
        l_subject_row_counts.push(n_rows_subject);

        for n_idx_row in 0..n_rows_subject {
            let if_first_row = n_idx_row == 0;
            let external = record.externals.get(n_idx_row).unwrap_or(&external_empty);

            let mut row = SpecPhysicalRow {
                internal_name: record
                    .internals
                    .get(n_idx_row)
                    .map(|internal| internal.name.clone())
                    .unwrap_or_default(),
                external_name: external.name.clone(),
                external_address: external.address.clone(),
                external_contact: external.contact.clone(),
                external_email: external.email.clone(),
                if_first_row_of_subject: if_first_row,
                ..Default::default()
            };

            if rule_scope == EnumPermissionScope::Examiner {
                row.permission = external.verification.clone();
            }

            if if_first_row {
                row.serial = (n_idx_subject + 1).to_string();
                row.subject_name = record.subject_name.clone();
                row.subject_code = record.subject_code.clone();
                row.semester = record.semester.clone();
                row.students_enrolled = record.students_enrolled.clone();
                row.n_rows_subject = n_rows_subject;
                if rule_scope == EnumPermissionScope::Subject {
                    row.permission = record.verification.clone();
                }
            }

            l_rows.push(row);
        }
    }

    log::debug!(
        "expanded {} subject(s) into {} physical row(s)",
        records.len(),
        l_rows.len()
    );

    SpecRowExpansion {
        rows: l_rows,
        subject_row_counts: l_subject_row_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecInternalExaminer;

    fn create_internal(name: &str) -> SpecInternalExaminer {
        SpecInternalExaminer {
            name: name.to_string(),
        }
    }

    fn create_external(name: &str) -> SpecExternalExaminer {
        SpecExternalExaminer {
            name: name.to_string(),
            address: format!("{name} address"),
            contact: "9876543210".to_string(),
            email: format!("{}@uni.edu", name.to_lowercase().replace(['.', ' '], "")),
            verification: "No".to_string(),
            years_of_experience: "5".to_string(),
        }
    }

    fn create_record(n_internals: usize, n_externals: usize) -> SpecSubjectRecord {
        SpecSubjectRecord {
            subject_name: "Data Structures".to_string(),
            subject_code: "CS301".to_string(),
            semester: "III".to_string(),
            students_enrolled: "60".to_string(),
            verification: "Yes".to_string(),
            internals: (0..n_internals)
                .map(|n| create_internal(&format!("Int {n}")))
                .collect(),
            externals: (0..n_externals)
                .map(|n| create_external(&format!("Ext {n}")))
                .collect(),
        }
    }

    #[test]
    fn test_row_count_is_max_of_lists_and_one() {
        let l_records = vec![
            create_record(0, 0),
            create_record(1, 3),
            create_record(4, 2),
            create_record(2, 2),
        ];
        let expansion = expand_subject_records(&l_records, EnumPermissionScope::Subject);

        assert_eq!(expansion.subject_row_counts, vec![1, 3, 4, 2]);
        assert_eq!(expansion.rows.len(), 10);
    }

    #[test]
    fn test_every_examiner_appears_once_in_order() {
        let record = create_record(2, 5);
        let expansion = expand_subject_records(
            std::slice::from_ref(&record),
            EnumPermissionScope::Subject,
        );

        let l_internal_names: Vec<&str> = expansion
            .rows
            .iter()
            .map(|row| row.internal_name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        let l_external_names: Vec<&str> = expansion
            .rows
            .iter()
            .map(|row| row.external_name.as_str())
            .collect();

        assert_eq!(l_internal_names, vec!["Int 0", "Int 1"]);
        assert_eq!(
            l_external_names,
            vec!["Ext 0", "Ext 1", "Ext 2", "Ext 3", "Ext 4"]
        );
    }

    #[test]
    fn test_serial_numbers_increment_once_per_subject() {
        let l_records = vec![create_record(1, 3), create_record(1, 1), create_record(2, 0)];
        let expansion = expand_subject_records(&l_records, EnumPermissionScope::Subject);

        let l_serials: Vec<&str> = expansion
            .rows
            .iter()
            .map(|row| row.serial.as_str())
            .collect();
        assert_eq!(l_serials, vec!["1", "", "", "2", "3", ""]);

        let l_first_flags: Vec<bool> = expansion
            .rows
            .iter()
            .map(|row| row.if_first_row_of_subject)
            .collect();
        assert_eq!(l_first_flags, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn test_continuation_rows_blank_subject_fields() {
        let expansion =
            expand_subject_records(&[create_record(1, 3)], EnumPermissionScope::Subject);
        let l_rows = &expansion.rows;
        assert_eq!(l_rows.len(), 3);

        assert_eq!(l_rows[0].subject_name, "Data Structures");
        assert_eq!(l_rows[0].students_enrolled, "60");
        assert_eq!(l_rows[0].permission, "Yes");
        assert_eq!(l_rows[0].internal_name, "Int 0");
        assert_eq!(l_rows[0].external_name, "Ext 0");
        assert_eq!(l_rows[0].n_rows_subject, 3);

        for row in &l_rows[1..] {
            assert_eq!(row.serial, "");
            assert_eq!(row.subject_name, "");
            assert_eq!(row.subject_code, "");
            assert_eq!(row.semester, "");
            assert_eq!(row.students_enrolled, "");
            assert_eq!(row.permission, "");
            assert_eq!(row.internal_name, "");
            assert!(!row.external_name.is_empty());
            assert!(!row.external_contact.is_empty());
        }
    }

    #[test]
    fn test_examiner_scope_permission_is_per_row() {
        let mut record = create_record(1, 2);
        record.externals[1].verification = "Yes".to_string();
        let expansion = expand_subject_records(&[record], EnumPermissionScope::Examiner);

        assert_eq!(expansion.rows[0].permission, "No");
        assert_eq!(expansion.rows[1].permission, "Yes");
    }

    #[test]
    fn test_missing_external_side_renders_empty_cells() {
        let expansion =
            expand_subject_records(&[create_record(3, 1)], EnumPermissionScope::Examiner);
        let row = &expansion.rows[2];
        assert_eq!(row.internal_name, "Int 2");
        assert_eq!(
            row.to_cells()[6..],
            ["", "", "", "", ""].map(String::from)
        );
    }

    #[test]
    fn test_select_subject_records_fills_gaps_and_ignores_extra() {
        let mut dict_records = BTreeMap::new();
        dict_records.insert(0, create_record(1, 1));
        dict_records.insert(2, create_record(1, 2));
        dict_records.insert(7, create_record(1, 1));

        let l_records = select_subject_records(&dict_records, 3);
        assert_eq!(l_records.len(), 3);
        assert_eq!(l_records[1], SpecSubjectRecord::default());
        assert_eq!(l_records[2].externals.len(), 2);
    }
}
