//! Typed in-memory table produced by the fixed-width reader.

use indexmap::IndexMap;

use crate::error::{Result, SurvcheckError};

/// A single decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Missing,
}

impl Value {
    /// Integer view of the value.
    ///
    /// String cells holding digits coerce (survey identifiers are often
    /// declared `str12` in the dictionary but are numeric in practice).
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Float view of the value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            Value::Missing => None,
        }
    }

    /// Whether this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Missing => write!(f, "."),
        }
    }
}

/// Stand-in for cells past the end of a short row.
static MISSING: Value = Value::Missing;

/// Row-major typed table with named columns.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Decoded rows.
    pub rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Create a new table.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values in a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&MISSING))
    }

    /// A specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Integer view of a named column, in row order.
    ///
    /// Cells that cannot be read as integers (missing or malformed)
    /// come back as `None`; callers decide what a hole means.
    pub fn int_column(&self, name: &str) -> Result<Vec<Option<i64>>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| SurvcheckError::MissingColumn(name.to_string()))?;
        Ok(self.column_values(index).map(Value::as_int).collect())
    }

    /// Frequency counts for an integer column, keyed in first-seen order.
    /// Missing and malformed cells are not counted.
    pub fn value_counts(&self, name: &str) -> Result<IndexMap<i64, usize>> {
        let mut counts: IndexMap<i64, usize> = IndexMap::new();
        for value in self.int_column(name)?.into_iter().flatten() {
            *counts.entry(value).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["caseid".to_string(), "pregnum".to_string()],
            vec![
                vec![Value::Str("2298".to_string()), Value::Int(4)],
                vec![Value::Str("5012".to_string()), Value::Int(1)],
                vec![Value::Missing, Value::Int(1)],
            ],
        )
    }

    #[test]
    fn test_int_column_coerces_strings() {
        let table = sample_table();
        let ids = table.int_column("caseid").unwrap();
        assert_eq!(ids, vec![Some(2298), Some(5012), None]);
    }

    #[test]
    fn test_missing_column() {
        let table = sample_table();
        let err = table.int_column("nosuch").unwrap_err();
        assert!(matches!(err, SurvcheckError::MissingColumn(_)));
    }

    #[test]
    fn test_value_counts_skips_missing() {
        let table = sample_table();
        let counts = table.value_counts("pregnum").unwrap();
        assert_eq!(counts.get(&4), Some(&1));
        assert_eq!(counts.get(&1), Some(&2));

        let ids = table.value_counts("caseid").unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_malformed_string_is_not_an_int() {
        assert_eq!(Value::Str("12x".to_string()).as_int(), None);
        assert_eq!(Value::Missing.as_int(), None);
        assert_eq!(Value::Int(7).as_int(), Some(7));
    }
}
