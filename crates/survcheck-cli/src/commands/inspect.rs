//! Inspect command - show a dictionary's field layout and row counts.

use std::path::PathBuf;

use colored::Colorize;
use survcheck::{DictParser, FixedWidthReader, ReaderConfig};

pub fn run(
    dct: PathBuf,
    dat: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !dct.exists() {
        return Err(format!("File not found: {}", dct.display()).into());
    }

    let dict = DictParser::new()?.parse_file(&dct)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dict)?);
    } else {
        println!(
            "{} {} ({} fields, line width {})",
            "Dictionary".cyan().bold(),
            dct.display().to_string().white(),
            dict.field_count(),
            dict.line_width()
        );
        for field in &dict.fields {
            println!(
                "  {:12} {:>5} {:>5}  {:8} {}",
                field.name,
                field.start,
                field.width,
                format!("{:?}", field.var_type).to_lowercase(),
                field.description
            );
        }
    }

    if let Some(dat) = dat {
        if !dat.exists() {
            return Err(format!("File not found: {}", dat.display()).into());
        }

        let reader = FixedWidthReader::with_config(ReaderConfig::default());
        let (table, source) = reader.read_file(&dict, &dat)?;

        println!();
        println!(
            "{} {} rows, {} columns ({})",
            "Data".cyan().bold(),
            table.row_count(),
            table.column_count(),
            source.format
        );
        if verbose {
            println!("  {}", source.hash);
            println!("  {} bytes", source.size_bytes);
        }
    }

    Ok(())
}
