//! survcheck: consistency checker for linked NSFG survey files.
//!
//! The National Survey of Family Growth publishes a respondent file and a
//! pregnancy file, linked by a shared case identifier. Each respondent
//! self-reports how many pregnancies she has had; the pregnancy file
//! carries one fixed-width record per pregnancy. survcheck loads both
//! files from their Stata dictionaries, indexes pregnancy records by
//! caseid, and verifies that every respondent's self-reported count
//! matches the records actually present.
//!
//! # Example
//!
//! ```no_run
//! use survcheck::{CheckPaths, Checker, CheckerConfig};
//!
//! let checker = Checker::with_config(CheckerConfig::new(7643, 1267));
//! let report = checker.run(&CheckPaths {
//!     resp_dct: "2002FemResp.dct".into(),
//!     resp_dat: "2002FemResp.dat.gz".into(),
//!     preg_dct: "2002FemPreg.dct".into(),
//!     preg_dat: "2002FemPreg.dat.gz".into(),
//! }).unwrap();
//!
//! assert!(report.passed);
//! ```

pub mod checker;
pub mod dict;
pub mod error;
pub mod input;
pub mod survey;
pub mod validation;

pub use checker::{Assertion, CheckPaths, CheckReport, Checker, CheckerConfig};
pub use dict::{DictParser, Dictionary, FieldSpec, VarType};
pub use error::{Result, SurvcheckError};
pub use input::{
    Cleaner, DataTable, FixedWidthReader, NoopCleaner, ReaderConfig, SourceMetadata, Value,
};
pub use survey::{CASEID, PREGNUM, PregnancyIndex, SurveyTable};
pub use validation::{CrossCheckOutcome, CrossCheckReport, CrossValidator};
