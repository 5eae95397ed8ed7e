//! Parser for Stata `infile dictionary` files.
//!
//! A dictionary describes the fixed-width layout of a data file, one
//! variable per line:
//!
//! ```text
//! infile dictionary {
//!     _column(1)   str12  caseid   %12s  "RESPONDENT ID NUMBER"
//!     _column(13)  byte   pregnum  %2f   "NUMBER OF PREGNANCIES"
//! }
//! ```
//!
//! Field widths are not stated directly: each field runs up to the start
//! of the next one, and the last field's width comes from the digits of
//! its display format.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::schema::{Dictionary, FieldSpec, VarType};
use crate::error::{Result, SurvcheckError};

/// One field definition per line; everything else in the file is ignored.
const FIELD_LINE: &str =
    r#"_column\((\d+)\)\s+(\w+)\s+([A-Za-z_]\w*)\s+(%(\d+)(?:\.\d+)?[a-z])(?:\s+"([^"]*)")?"#;

/// Parses Stata dictionary files into a [`Dictionary`].
pub struct DictParser {
    field_line: Regex,
}

impl DictParser {
    /// Create a new parser.
    pub fn new() -> Result<Self> {
        Ok(Self {
            field_line: Regex::new(FIELD_LINE)?,
        })
    }

    /// Parse a dictionary file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dictionary> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SurvcheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_str(&contents)
    }

    /// Parse dictionary text.
    pub fn parse_str(&self, contents: &str) -> Result<Dictionary> {
        // (line number, start, type, name, format, format digits, description)
        let mut entries: Vec<(usize, usize, VarType, String, String, usize, String)> = Vec::new();

        for (idx, line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let Some(caps) = self.field_line.captures(line) else {
                continue;
            };

            let start: usize = caps[1].parse().map_err(|_| SurvcheckError::Dict {
                line: line_no,
                message: format!("invalid column position '{}'", &caps[1]),
            })?;
            // Column positions are 1-based; 0 would underflow every
            // offset computed from it.
            if start == 0 {
                return Err(SurvcheckError::Dict {
                    line: line_no,
                    message: "column positions are 1-based, got _column(0)".to_string(),
                });
            }
            let var_type =
                VarType::from_token(&caps[2]).ok_or_else(|| SurvcheckError::Dict {
                    line: line_no,
                    message: format!("unknown type token '{}'", &caps[2]),
                })?;
            let name = caps[3].to_lowercase();
            let format = caps[4].to_string();
            let fmt_digits: usize = caps[5].parse().map_err(|_| SurvcheckError::Dict {
                line: line_no,
                message: format!("invalid format width '{}'", &caps[5]),
            })?;
            let description = caps
                .get(6)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            entries.push((line_no, start, var_type, name, format, fmt_digits, description));
        }

        if entries.is_empty() {
            return Err(SurvcheckError::Dict {
                line: 0,
                message: "no field definitions found".to_string(),
            });
        }

        // Widths: distance to the next field's start; the last field takes
        // the width declared in its display format.
        let mut fields = Vec::with_capacity(entries.len());
        for i in 0..entries.len() {
            let (line_no, start, var_type, ref name, ref format, fmt_digits, ref description) =
                entries[i];

            let width = match entries.get(i + 1) {
                Some(&(next_line, next_start, ..)) => {
                    if next_start <= start {
                        return Err(SurvcheckError::Dict {
                            line: next_line,
                            message: format!(
                                "column positions must increase ({} after {})",
                                next_start, start
                            ),
                        });
                    }
                    next_start - start
                }
                None => fmt_digits,
            };

            if width == 0 {
                return Err(SurvcheckError::Dict {
                    line: line_no,
                    message: format!("field '{}' has zero width", name),
                });
            }

            fields.push(FieldSpec {
                name: name.clone(),
                start,
                width,
                var_type,
                format: format.clone(),
                description: description.clone(),
            });
        }

        Ok(Dictionary::new(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESP_DCT: &str = r#"
infile dictionary {
    _column(1)      str12   CASEID        %12s  "RESPONDENT ID NUMBER"
    _column(13)     byte    PREGNUM        %2f  "NUMBER OF PREGNANCIES"
    _column(15)     double  FINALWGT    %18.16f  "FINAL WEIGHT"
}
"#;

    #[test]
    fn test_parse_fields() {
        let parser = DictParser::new().unwrap();
        let dict = parser.parse_str(RESP_DCT).unwrap();

        assert_eq!(dict.field_count(), 3);
        assert_eq!(dict.field_names(), vec!["caseid", "pregnum", "finalwgt"]);

        let caseid = dict.field("caseid").unwrap();
        assert_eq!(caseid.start, 1);
        assert_eq!(caseid.width, 12);
        assert_eq!(caseid.var_type, VarType::Str(12));

        let pregnum = dict.field("pregnum").unwrap();
        assert_eq!(pregnum.start, 13);
        assert_eq!(pregnum.width, 2);
        assert_eq!(pregnum.var_type, VarType::Byte);

        // Last field falls back to its format width.
        let finalwgt = dict.field("finalwgt").unwrap();
        assert_eq!(finalwgt.width, 18);
        assert_eq!(finalwgt.var_type, VarType::Double);
    }

    #[test]
    fn test_non_field_lines_ignored() {
        let parser = DictParser::new().unwrap();
        let dict = parser.parse_str(RESP_DCT).unwrap();
        assert_eq!(dict.line_width(), 32);
    }

    #[test]
    fn test_empty_dictionary_rejected() {
        let parser = DictParser::new().unwrap();
        let err = parser.parse_str("infile dictionary {\n}\n").unwrap_err();
        assert!(matches!(err, SurvcheckError::Dict { .. }));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let parser = DictParser::new().unwrap();
        let text = r#"_column(1)  quux  caseid  %4f  "ID""#;
        let err = parser.parse_str(text).unwrap_err();
        assert!(matches!(err, SurvcheckError::Dict { line: 1, .. }));
    }

    #[test]
    fn test_column_zero_rejected() {
        let parser = DictParser::new().unwrap();
        let text = "_column(0)  str12  caseid  %12s\n_column(13)  byte  pregnum  %2f\n";
        let err = parser.parse_str(text).unwrap_err();
        assert!(matches!(err, SurvcheckError::Dict { line: 1, .. }));
    }

    #[test]
    fn test_decreasing_columns_rejected() {
        let parser = DictParser::new().unwrap();
        let text = "_column(10)  byte  a  %2f\n_column(5)  byte  b  %2f\n";
        let err = parser.parse_str(text).unwrap_err();
        assert!(matches!(err, SurvcheckError::Dict { line: 2, .. }));
    }
}
