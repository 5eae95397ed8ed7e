//! Post-load cleaning hook.

use super::table::DataTable;

/// A transformation applied to a table right after it is decoded.
///
/// The loader runs exactly one cleaner per read. Future per-row
/// normalization (recoding sentinel values, unit fixes) slots in here
/// without touching the reader or indexer contracts.
pub trait Cleaner {
    /// Mutate the freshly loaded table in place.
    fn clean(&self, table: &mut DataTable);
}

/// The default cleaner: leaves the table untouched.
pub struct NoopCleaner;

impl Cleaner for NoopCleaner {
    fn clean(&self, _table: &mut DataTable) {}
}
