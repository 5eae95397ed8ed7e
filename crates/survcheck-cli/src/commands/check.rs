//! Check command - run the full respondent/pregnancy validation pass.

use std::path::{Path, PathBuf};

use colored::Colorize;
use survcheck::{CheckPaths, Checker, CheckerConfig, ReaderConfig};

#[allow(clippy::too_many_arguments)]
pub fn run(
    resp_dct: PathBuf,
    resp_dat: PathBuf,
    preg_dct: PathBuf,
    preg_dat: PathBuf,
    expect_rows: usize,
    expect_single: usize,
    max_rows: Option<usize>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&resp_dct, &resp_dat, &preg_dct, &preg_dat] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    if verbose {
        println!(
            "{} {} / {}",
            "Checking".cyan().bold(),
            resp_dat.display().to_string().white(),
            preg_dat.display().to_string().white()
        );
    }

    let mut config = CheckerConfig::new(expect_rows, expect_single);
    config.reader = ReaderConfig { max_rows };

    let checker = Checker::with_config(config);
    let report = checker.run(&CheckPaths {
        resp_dct,
        resp_dat,
        preg_dct,
        preg_dat,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.passed {
            return Err("validation failed".into());
        }
        return Ok(());
    }

    for assertion in &report.assertions {
        let mark = if assertion.passed {
            "ok".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "  {:4} {} (expected {}, got {})",
            mark, assertion.name, assertion.expected, assertion.actual
        );
    }

    if let Some(ref cross) = report.cross_check {
        if cross.passed() {
            println!(
                "  {:4} cross-check: {} respondents consistent",
                "ok".green().bold(),
                cross.rows_checked
            );
        } else {
            // The diagnostic names the caseid and both counts.
            println!("  {:4} cross-check: {}", "FAIL".red().bold(), cross.outcome);
        }
    }

    if !report.passed {
        return Err("validation failed".into());
    }

    println!("{}: All tests passed.", program_name());
    Ok(())
}

/// Name of the invoking binary, for the final success line.
fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "survcheck".to_string())
}
