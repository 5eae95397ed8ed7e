//! Respondent-vs-pregnancy count cross-check.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::DataTable;
use crate::survey::{CASEID, PREGNUM, PregnancyIndex};

/// Result of checking one respondent file against the pregnancy index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CrossCheckOutcome {
    /// Every respondent's self-reported count matched.
    Pass,
    /// A respondent's self-reported count disagrees with the index.
    CountMismatch {
        /// Respondent row (0-based) where the check stopped.
        row: usize,
        caseid: i64,
        /// Number of pregnancy records indexed for this case.
        indexed: usize,
        /// The respondent's self-reported count.
        reported: i64,
    },
    /// A respondent row is missing its caseid or pregnum.
    MissingField { row: usize, field: String },
}

impl std::fmt::Display for CrossCheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossCheckOutcome::Pass => write!(f, "all respondents consistent"),
            CrossCheckOutcome::CountMismatch {
                caseid,
                indexed,
                reported,
                ..
            } => write!(
                f,
                "caseid {}: {} pregnancy records indexed, {} self-reported",
                caseid, indexed, reported
            ),
            CrossCheckOutcome::MissingField { row, field } => {
                write!(f, "respondent row {} has no usable {}", row, field)
            }
        }
    }
}

/// Outcome plus how far the scan got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCheckReport {
    /// Respondent rows examined before stopping.
    pub rows_checked: usize,
    pub outcome: CrossCheckOutcome,
}

impl CrossCheckReport {
    /// Whether the whole respondent file checked out.
    pub fn passed(&self) -> bool {
        self.outcome == CrossCheckOutcome::Pass
    }
}

/// Compares each respondent's self-reported pregnancy count against the
/// number of records indexed for their case identifier.
///
/// The scan stops at the first disagreement; the report carries the
/// offending caseid with both counts.
pub struct CrossValidator;

impl CrossValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the cross-check over the respondent table, in row order.
    /// A caseid absent from the index counts as zero records.
    pub fn validate(
        &self,
        respondents: &DataTable,
        index: &PregnancyIndex,
    ) -> Result<CrossCheckReport> {
        let caseids = respondents.int_column(CASEID)?;
        let pregnums = respondents.int_column(PREGNUM)?;

        for (row, (caseid, pregnum)) in caseids.iter().zip(pregnums.iter()).enumerate() {
            let Some(caseid) = *caseid else {
                return Ok(CrossCheckReport {
                    rows_checked: row,
                    outcome: CrossCheckOutcome::MissingField {
                        row,
                        field: CASEID.to_string(),
                    },
                });
            };
            let Some(reported) = *pregnum else {
                return Ok(CrossCheckReport {
                    rows_checked: row,
                    outcome: CrossCheckOutcome::MissingField {
                        row,
                        field: PREGNUM.to_string(),
                    },
                });
            };

            let indexed = index.count_for(caseid);
            if indexed as i64 != reported {
                return Ok(CrossCheckReport {
                    rows_checked: row,
                    outcome: CrossCheckOutcome::CountMismatch {
                        row,
                        caseid,
                        indexed,
                        reported,
                    },
                });
            }
        }

        Ok(CrossCheckReport {
            rows_checked: respondents.row_count(),
            outcome: CrossCheckOutcome::Pass,
        })
    }
}

impl Default for CrossValidator {
    fn default() -> Self {
        Self::new()
    }
}
