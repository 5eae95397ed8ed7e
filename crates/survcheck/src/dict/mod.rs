//! Stata dictionary parsing for fixed-width survey files.

mod parser;
mod schema;

pub use parser::DictParser;
pub use schema::{Dictionary, FieldSpec, VarType};
