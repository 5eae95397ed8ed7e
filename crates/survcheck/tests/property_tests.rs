//! Property-based tests for the pregnancy index and cross-validator.
//!
//! These tests use proptest to generate random caseid layouts and verify
//! that the core invariants hold under all conditions:
//!
//! 1. **Counting**: the index holds one entry per record occurrence,
//!    never deduplicated, never dropped.
//! 2. **Agreement**: a respondent file derived from the pregnancy file
//!    always cross-checks clean.
//! 3. **Detection**: corrupting exactly one self-reported count is
//!    always caught, at that row.
//! 4. **Determinism**: the same input always produces the same result.

use std::collections::HashMap;

use proptest::prelude::*;

use survcheck::{
    CASEID, CrossCheckOutcome, CrossValidator, DataTable, PREGNUM, PregnancyIndex, Value,
};

/// Random pregnancy file: a sequence of caseids drawn from a small pool,
/// so repeats are common.
fn caseid_sequence() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..20, 1..60)
}

fn pregnancy_table(caseids: &[i64]) -> DataTable {
    DataTable::new(
        vec![CASEID.to_string()],
        caseids.iter().map(|id| vec![Value::Int(*id)]).collect(),
    )
}

/// Respondent file whose pregnum column is derived from the pregnancy
/// records, plus a few extra respondents with zero records.
fn derived_respondents(caseids: &[i64]) -> DataTable {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for id in caseids {
        *counts.entry(*id).or_insert(0) += 1;
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    let mut seen: Vec<i64> = Vec::new();
    for id in caseids {
        if !seen.contains(id) {
            seen.push(*id);
            rows.push(vec![Value::Int(*id), Value::Int(counts[id])]);
        }
    }
    // Respondents with no pregnancy records report zero.
    for id in 100..103 {
        rows.push(vec![Value::Int(id), Value::Int(0)]);
    }

    DataTable::new(vec![CASEID.to_string(), PREGNUM.to_string()], rows)
}

proptest! {
    #[test]
    fn index_counts_match_occurrences(caseids in caseid_sequence()) {
        let table = pregnancy_table(&caseids);
        let index = PregnancyIndex::build(&table).unwrap();

        let mut expected: HashMap<i64, usize> = HashMap::new();
        for id in &caseids {
            *expected.entry(*id).or_insert(0) += 1;
        }

        for (id, count) in &expected {
            prop_assert_eq!(index.count_for(*id), *count);
        }
        prop_assert_eq!(index.case_count(), expected.len());
        prop_assert_eq!(index.record_count(), caseids.len());
    }

    #[test]
    fn index_preserves_row_order(caseids in caseid_sequence()) {
        let table = pregnancy_table(&caseids);
        let index = PregnancyIndex::build(&table).unwrap();

        for (_, records) in index.iter() {
            prop_assert!(records.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn derived_respondents_always_pass(caseids in caseid_sequence()) {
        let preg = pregnancy_table(&caseids);
        let resp = derived_respondents(&caseids);
        let index = PregnancyIndex::build(&preg).unwrap();

        let report = CrossValidator::new().validate(&resp, &index).unwrap();
        prop_assert!(report.passed());
        prop_assert_eq!(report.rows_checked, resp.row_count());
    }

    #[test]
    fn single_corruption_always_detected(
        caseids in caseid_sequence(),
        victim in 0usize..50,
        delta in 1i64..5,
    ) {
        let preg = pregnancy_table(&caseids);
        let mut resp = derived_respondents(&caseids);
        let row = victim % resp.row_count();

        let caseid = resp.rows[row][0].as_int().unwrap();
        let honest = resp.rows[row][1].as_int().unwrap();
        resp.rows[row][1] = Value::Int(honest + delta);

        let index = PregnancyIndex::build(&preg).unwrap();
        let report = CrossValidator::new().validate(&resp, &index).unwrap();

        prop_assert!(!report.passed());
        prop_assert_eq!(report.rows_checked, row);
        prop_assert_eq!(
            report.outcome,
            CrossCheckOutcome::CountMismatch {
                row,
                caseid,
                indexed: honest as usize,
                reported: honest + delta,
            }
        );
    }

    #[test]
    fn validation_is_deterministic(caseids in caseid_sequence()) {
        let preg = pregnancy_table(&caseids);
        let resp = derived_respondents(&caseids);

        let first = CrossValidator::new()
            .validate(&resp, &PregnancyIndex::build(&preg).unwrap())
            .unwrap();
        let second = CrossValidator::new()
            .validate(&resp, &PregnancyIndex::build(&preg).unwrap())
            .unwrap();

        prop_assert_eq!(first, second);
    }
}
