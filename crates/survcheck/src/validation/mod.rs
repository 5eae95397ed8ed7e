//! Cross-file consistency validation.

mod cross_check;

pub use cross_check::{CrossCheckOutcome, CrossCheckReport, CrossValidator};
