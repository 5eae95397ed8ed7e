//! NSFG survey file bindings.
//!
//! The respondent and pregnancy files share one loading path: parse the
//! Stata dictionary, decode the fixed-width data file against it, then
//! run the cleaning hook.

mod index;

pub use index::PregnancyIndex;

use std::path::Path;

use crate::dict::DictParser;
use crate::error::Result;
use crate::input::{
    Cleaner, DataTable, FixedWidthReader, NoopCleaner, ReaderConfig, SourceMetadata,
};

/// Column holding the case identifier linking the two files.
pub const CASEID: &str = "caseid";

/// Column holding the respondent's self-reported pregnancy count.
pub const PREGNUM: &str = "pregnum";

/// A loaded survey file: decoded table plus provenance.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    pub table: DataTable,
    pub source: SourceMetadata,
}

/// Load a survey file given its dictionary and data paths.
pub fn read_survey(
    dct: impl AsRef<Path>,
    dat: impl AsRef<Path>,
    config: &ReaderConfig,
    cleaner: impl Cleaner + 'static,
) -> Result<SurveyTable> {
    let dict = DictParser::new()?.parse_file(dct)?;
    let reader = FixedWidthReader::with_config(config.clone()).with_cleaner(cleaner);
    let (table, source) = reader.read_file(&dict, dat)?;
    Ok(SurveyTable { table, source })
}

/// Load the respondent file.
pub fn read_respondents(
    dct: impl AsRef<Path>,
    dat: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<SurveyTable> {
    read_survey(dct, dat, config, NoopCleaner)
}

/// Load the pregnancy file.
pub fn read_pregnancies(
    dct: impl AsRef<Path>,
    dat: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<SurveyTable> {
    read_survey(dct, dat, config, NoopCleaner)
}
