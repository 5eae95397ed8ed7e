//! Fixed-width data loading.

mod cleaner;
mod reader;
mod table;

pub use cleaner::{Cleaner, NoopCleaner};
pub use reader::{FixedWidthReader, ReaderConfig, SourceMetadata};
pub use table::{DataTable, Value};
