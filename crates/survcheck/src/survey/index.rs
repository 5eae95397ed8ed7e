//! Case-identifier index over the pregnancy table.

use indexmap::IndexMap;

use crate::error::Result;
use crate::input::DataTable;

use super::CASEID;

/// Maps each case identifier to the row indices of its pregnancy
/// records, preserving original row order within each case.
///
/// Cases keep their first-occurrence order; a caseid with no records
/// simply has no entry, and lookups for it return an empty slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PregnancyIndex {
    map: IndexMap<i64, Vec<usize>>,
}

impl PregnancyIndex {
    /// Build the index from a pregnancy table.
    ///
    /// Rows whose caseid is missing or malformed are left out; they
    /// surface downstream as count mismatches for whoever owns them.
    pub fn build(table: &DataTable) -> Result<Self> {
        let mut map: IndexMap<i64, Vec<usize>> = IndexMap::new();

        for (row, caseid) in table.int_column(CASEID)?.into_iter().enumerate() {
            if let Some(caseid) = caseid {
                map.entry(caseid).or_default().push(row);
            }
        }

        Ok(Self { map })
    }

    /// Row indices of the pregnancy records for a case. Empty when the
    /// case has no records.
    pub fn records_for(&self, caseid: i64) -> &[usize] {
        self.map.get(&caseid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of pregnancy records indexed for a case.
    pub fn count_for(&self, caseid: i64) -> usize {
        self.records_for(caseid).len()
    }

    /// Number of distinct cases with at least one record.
    pub fn case_count(&self) -> usize {
        self.map.len()
    }

    /// Total number of indexed records.
    pub fn record_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    /// Iterate cases in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[usize])> {
        self.map.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;

    fn preg_table(caseids: &[Option<i64>]) -> DataTable {
        let rows = caseids
            .iter()
            .map(|id| {
                vec![match id {
                    Some(n) => Value::Int(*n),
                    None => Value::Missing,
                }]
            })
            .collect();
        DataTable::new(vec![CASEID.to_string()], rows)
    }

    #[test]
    fn test_rows_grouped_in_order() {
        let table = preg_table(&[Some(7), Some(3), Some(7), Some(7), Some(3)]);
        let index = PregnancyIndex::build(&table).unwrap();

        assert_eq!(index.records_for(7), &[0, 2, 3]);
        assert_eq!(index.records_for(3), &[1, 4]);
        assert_eq!(index.case_count(), 2);
        assert_eq!(index.record_count(), 5);
    }

    #[test]
    fn test_repeated_caseid_not_deduplicated() {
        let table = preg_table(&[Some(9), Some(9), Some(9)]);
        let index = PregnancyIndex::build(&table).unwrap();
        assert_eq!(index.count_for(9), 3);
    }

    #[test]
    fn test_unknown_caseid_is_zero_records() {
        let table = preg_table(&[Some(1)]);
        let index = PregnancyIndex::build(&table).unwrap();
        assert_eq!(index.count_for(42), 0);
        assert!(index.records_for(42).is_empty());
    }

    #[test]
    fn test_missing_caseid_skipped() {
        let table = preg_table(&[Some(1), None, Some(1)]);
        let index = PregnancyIndex::build(&table).unwrap();
        assert_eq!(index.records_for(1), &[0, 2]);
        assert_eq!(index.record_count(), 2);
    }

    #[test]
    fn test_first_occurrence_order_preserved() {
        let table = preg_table(&[Some(30), Some(10), Some(20), Some(10)]);
        let index = PregnancyIndex::build(&table).unwrap();
        let cases: Vec<i64> = index.iter().map(|(id, _)| id).collect();
        assert_eq!(cases, vec![30, 10, 20]);
    }
}
