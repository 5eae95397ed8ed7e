//! Whole-run orchestration: load both files, assert known facts, cross-check.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{ReaderConfig, SourceMetadata};
use crate::survey::{self, PREGNUM, PregnancyIndex};
use crate::validation::{CrossCheckReport, CrossValidator};

/// Ground-truth expectations for one dataset snapshot.
///
/// These are golden values tied to a specific pair of input files, not
/// derivable constants; the CLI supplies the 2002-cycle defaults.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Expected respondent row count.
    pub expected_respondents: usize,
    /// Expected number of respondents reporting exactly one pregnancy.
    pub expected_single: usize,
    /// Reader configuration shared by both loads.
    pub reader: ReaderConfig,
}

impl CheckerConfig {
    pub fn new(expected_respondents: usize, expected_single: usize) -> Self {
        Self {
            expected_respondents,
            expected_single,
            reader: ReaderConfig::default(),
        }
    }
}

/// Paths to the four input files.
#[derive(Debug, Clone)]
pub struct CheckPaths {
    pub resp_dct: PathBuf,
    pub resp_dat: PathBuf,
    pub preg_dct: PathBuf,
    pub preg_dat: PathBuf,
}

/// One expected-vs-actual assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    pub name: String,
    pub expected: usize,
    pub actual: usize,
    pub passed: bool,
}

impl Assertion {
    fn check(name: &str, expected: usize, actual: usize) -> Self {
        Self {
            name: name.to_string(),
            expected,
            actual,
            passed: expected == actual,
        }
    }
}

/// Full run report. Checks run in order and stop at the first failure,
/// so later fields may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Respondent file provenance.
    pub respondents: SourceMetadata,
    /// Pregnancy file provenance (absent if an assertion failed first).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancies: Option<SourceMetadata>,
    /// Fixed assertions, in the order they ran.
    pub assertions: Vec<Assertion>,
    /// Cross-check result (absent if an assertion failed first).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check: Option<CrossCheckReport>,
    /// Overall verdict.
    pub passed: bool,
}

/// Runs the full validation pass.
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Load respondents, assert the snapshot facts, then cross-check
    /// against the pregnancy file. Stops at the first failed check;
    /// loading failures propagate as errors.
    pub fn run(&self, paths: &CheckPaths) -> Result<CheckReport> {
        let resp = survey::read_respondents(
            &paths.resp_dct,
            &paths.resp_dat,
            &self.config.reader,
        )?;

        let mut assertions = Vec::new();

        let rows = Assertion::check(
            "respondent row count",
            self.config.expected_respondents,
            resp.table.row_count(),
        );
        let rows_ok = rows.passed;
        assertions.push(rows);
        if !rows_ok {
            return Ok(CheckReport {
                respondents: resp.source,
                pregnancies: None,
                assertions,
                cross_check: None,
                passed: false,
            });
        }

        let singles = resp
            .table
            .value_counts(PREGNUM)?
            .get(&1)
            .copied()
            .unwrap_or(0);
        let single = Assertion::check(
            "respondents reporting one pregnancy",
            self.config.expected_single,
            singles,
        );
        let single_ok = single.passed;
        assertions.push(single);
        if !single_ok {
            return Ok(CheckReport {
                respondents: resp.source,
                pregnancies: None,
                assertions,
                cross_check: None,
                passed: false,
            });
        }

        let preg = survey::read_pregnancies(
            &paths.preg_dct,
            &paths.preg_dat,
            &self.config.reader,
        )?;
        let index = PregnancyIndex::build(&preg.table)?;
        let cross_check = CrossValidator::new().validate(&resp.table, &index)?;
        let passed = cross_check.passed();

        Ok(CheckReport {
            respondents: resp.source,
            pregnancies: Some(preg.source),
            assertions,
            cross_check: Some(cross_check),
            passed,
        })
    }
}
