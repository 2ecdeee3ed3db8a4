// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::AlumniId;
use crate::model::{AlumniRecord, FilterState, SelectorFilter};

/// The filter engine: maps the record store and the current filter state to
/// the ordered subset of matching identities. Pure and deterministic; the
/// result order follows store iteration order.
pub fn compute_visibility(records: &[AlumniRecord], filter: &FilterState) -> Vec<AlumniId> {
    records
        .iter()
        .filter(|record| matches(record, filter))
        .map(|record| record.id)
        .collect()
}

fn matches(record: &AlumniRecord, filter: &FilterState) -> bool {
    let department_ok = match &filter.department {
        SelectorFilter::All => true,
        SelectorFilter::Exact(wanted) => record
            .department
            .as_str()
            .trim()
            .eq_ignore_ascii_case(wanted.trim()),
    };
    if !department_ok {
        return false;
    }

    let year_ok = match &filter.year {
        SelectorFilter::All => true,
        SelectorFilter::Exact(wanted) => record.year.to_string() == wanted.trim(),
    };
    if !year_ok {
        return false;
    }

    let needle = filter.search.trim().to_lowercase();
    needle.is_empty() || search_haystack(record).contains(&needle)
}

/// Lowercase concatenation of every displayed field, mirroring a substring
/// search over the whole rendered row.
fn search_haystack(record: &AlumniRecord) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        record.id.code(),
        record.name,
        record.email,
        record.department.as_str(),
        record.year,
        record.job_title,
        record.company,
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::compute_visibility;
    use crate::ids::AlumniId;
    use crate::model::{AlumniRecord, Department, FilterState, SelectorFilter};
    use time::OffsetDateTime;

    fn record(id: i64, name: &str, department: Department, year: i32) -> AlumniRecord {
        AlumniRecord {
            id: AlumniId::new(id),
            name: name.to_owned(),
            email: format!("{}@alumni.example.edu", name.to_lowercase().replace(' ', ".")),
            department,
            year,
            job_title: String::new(),
            company: String::new(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn sample() -> Vec<AlumniRecord> {
        vec![
            record(1, "Ann Lee", Department::ComputerScience, 2020),
            record(2, "Bo Diaz", Department::ElectricalEngineering, 2019),
            record(3, "Casey Ward", Department::ComputerScience, 2019),
        ]
    }

    #[test]
    fn empty_store_yields_empty_result() {
        assert!(compute_visibility(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn unrestricted_filter_preserves_store_order() {
        let visible = compute_visibility(&sample(), &FilterState::default());
        assert_eq!(
            visible,
            vec![AlumniId::new(1), AlumniId::new(2), AlumniId::new(3)]
        );
    }

    #[test]
    fn department_filter_is_case_insensitive_and_trimmed() {
        let filter = FilterState {
            department: SelectorFilter::Exact(" computer science ".to_owned()),
            ..FilterState::default()
        };
        let visible = compute_visibility(&sample(), &filter);
        assert_eq!(visible, vec![AlumniId::new(1), AlumniId::new(3)]);
    }

    #[test]
    fn year_filter_requires_exact_match() {
        let filter = FilterState {
            year: SelectorFilter::Exact("2019".to_owned()),
            ..FilterState::default()
        };
        let visible = compute_visibility(&sample(), &filter);
        assert_eq!(visible, vec![AlumniId::new(2), AlumniId::new(3)]);
    }

    #[test]
    fn search_matches_any_displayed_field() {
        let filter = FilterState {
            search: "LEE".to_owned(),
            ..FilterState::default()
        };
        let visible = compute_visibility(&sample(), &filter);
        assert_eq!(visible, vec![AlumniId::new(1)]);

        // Search also hits the id code column.
        let filter = FilterState {
            search: "003".to_owned(),
            ..FilterState::default()
        };
        let visible = compute_visibility(&sample(), &filter);
        assert_eq!(visible, vec![AlumniId::new(3)]);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filter = FilterState {
            search: "ward".to_owned(),
            department: SelectorFilter::Exact("Computer Science".to_owned()),
            year: SelectorFilter::Exact("2019".to_owned()),
        };
        let visible = compute_visibility(&sample(), &filter);
        assert_eq!(visible, vec![AlumniId::new(3)]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let records = sample();
        let filter = FilterState {
            search: "e".to_owned(),
            ..FilterState::default()
        };
        let first = compute_visibility(&records, &filter);
        let second = compute_visibility(&records, &filter);
        assert_eq!(first, second);
    }
}
