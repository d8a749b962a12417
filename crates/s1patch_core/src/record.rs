//! `KEY=VALUE` record parsing.
//!
//! A patch file is one record per line. Blank lines are ignored and so are
//! step-sequence lines, which are not decoded at all. A repeated key keeps its
//! first position and takes the later value.

use std::collections::HashMap;
use std::fmt;

/// Keys with this prefix hold step-sequence data and are skipped.
pub const STEP_PREFIX: &str = "STEP_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub key: String,
    pub raw_value: String,
    /// 1-based line number of the occurrence whose value was kept.
    pub line: usize,
}

/// A line that is not a `KEY=VALUE` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MissingSeparator { line: usize, text: String },
    EmptyKey { line: usize },
}

impl RecordError {
    pub fn line(&self) -> usize {
        match self {
            RecordError::MissingSeparator { line, .. } | RecordError::EmptyKey { line } => *line,
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingSeparator { line, text } => {
                write!(f, "line {}: expected KEY=VALUE, found '{}'", line, text)
            }
            RecordError::EmptyKey { line } => write!(f, "line {}: record has no key", line),
        }
    }
}

impl std::error::Error for RecordError {}

/// Split a whole patch file into records, failing on the first bad line.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, RecordError> {
    let mut records: Vec<RawRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(STEP_PREFIX) {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(RecordError::MissingSeparator {
                line: line_no,
                text: trimmed.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(RecordError::EmptyKey { line: line_no });
        }
        let value = value.trim();

        match positions.get(key) {
            Some(&pos) => {
                let record = &mut records[pos];
                record.raw_value = value.to_string();
                record.line = line_no;
            }
            None => {
                positions.insert(key.to_string(), records.len());
                records.push(RawRecord {
                    key: key.to_string(),
                    raw_value: value.to_string(),
                    line: line_no,
                });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(records: &[RawRecord]) -> Vec<&str> {
        records.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn parses_in_file_order() {
        let records = parse_records("LENG=16\nTEMPO=12000\nSCALE=1\n").unwrap();
        assert_eq!(keys(&records), vec!["LENG", "TEMPO", "SCALE"]);
        assert_eq!(records[1].raw_value, "12000");
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn trims_keys_and_values() {
        let records = parse_records("  LEVEL =  70 \r\n").unwrap();
        assert_eq!(
            records,
            vec![RawRecord {
                key: "LEVEL".to_string(),
                raw_value: "70".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn skips_blank_and_step_lines() {
        let records = parse_records("STEP_01=5\n\n   \nLENG=20\nSTEP_02_NOTE=60 61 62\n").unwrap();
        assert_eq!(keys(&records), vec!["LENG"]);
        assert_eq!(records[0].raw_value, "20");
        assert_eq!(records[0].line, 4);
    }

    #[test]
    fn later_duplicate_overwrites_in_place() {
        let records = parse_records("LENG=16\nLEVEL=70\nLENG=32\n").unwrap();
        assert_eq!(keys(&records), vec!["LENG", "LEVEL"]);
        assert_eq!(records[0].raw_value, "32");
        assert_eq!(records[0].line, 3);
    }

    #[test]
    fn value_may_contain_equals() {
        let records = parse_records("NAME=a=b\n").unwrap();
        assert_eq!(records[0].raw_value, "a=b");
    }

    #[test]
    fn empty_value_is_kept() {
        let records = parse_records("LENG=\n").unwrap();
        assert_eq!(records[0].raw_value, "");
    }

    #[test]
    fn missing_separator_fails_whole_file() {
        let err = parse_records("LENG=16\nTEMPO 12000\nSCALE=1\n").unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingSeparator {
                line: 2,
                text: "TEMPO 12000".to_string()
            }
        );
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn empty_key_fails() {
        assert_eq!(
            parse_records("=5\n").unwrap_err(),
            RecordError::EmptyKey { line: 1 }
        );
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("").unwrap().is_empty());
    }
}
