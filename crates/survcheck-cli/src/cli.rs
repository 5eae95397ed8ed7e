//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// survcheck: consistency checker for linked NSFG survey files
#[derive(Parser)]
#[command(name = "survcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the respondent file against the pregnancy file
    Check {
        /// Respondent dictionary file
        #[arg(long, default_value = "2002FemResp.dct")]
        resp_dct: PathBuf,

        /// Respondent data file (plain or .gz)
        #[arg(long, default_value = "2002FemResp.dat.gz")]
        resp_dat: PathBuf,

        /// Pregnancy dictionary file
        #[arg(long, default_value = "2002FemPreg.dct")]
        preg_dct: PathBuf,

        /// Pregnancy data file (plain or .gz)
        #[arg(long, default_value = "2002FemPreg.dat.gz")]
        preg_dat: PathBuf,

        /// Expected respondent row count for this snapshot
        #[arg(long, default_value_t = 7643)]
        expect_rows: usize,

        /// Expected number of respondents reporting one pregnancy
        #[arg(long, default_value_t = 1267)]
        expect_single: usize,

        /// Read at most this many rows from each data file
        #[arg(long)]
        max_rows: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the field layout of a dictionary, and optionally row counts
    Inspect {
        /// Dictionary file to parse
        #[arg(value_name = "DCT_FILE")]
        dct: PathBuf,

        /// Data file to decode against the dictionary
        #[arg(value_name = "DAT_FILE")]
        dat: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
