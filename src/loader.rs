//! Batch loading from text or JSON.
//!
//! # Text Format
//!
//! One process per line:
//!
//! ```text
//! # pid arrival burst priority
//! 1 0 8 2
//! 2 1 4 1
//! ```
//!
//! Fields may be separated by whitespace, commas, or colons. `priority` may
//! be omitted (defaults to 0). Blank lines and `#` comments are skipped, as
//! is a leading header line in which no field is a number.
//!
//! # JSON Format
//!
//! An array of [`Process`] objects; `priority`, `waiting_time` and
//! `turnaround_time` are optional. Paths ending in `.json` are read as JSON.
//!
//! Every loaded batch is passed through [`validate_batch`] before it is
//! returned.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Process;
use crate::validation::validate_batch;

/// Parses a text batch from a string.
///
/// # Example
/// ```
/// let batch = schedsim::loader::parse_batch("1 0 5 3\n2,2,4,1\n").unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[1].burst_time, 4);
/// ```
pub fn parse_batch(input: &str) -> Result<Vec<Process>> {
    read_batch(input.as_bytes())
}

/// Reads a text batch from any buffered reader.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    let mut seen_record = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            continue;
        }

        if !seen_record && fields.iter().all(|f| f.parse::<i64>().is_err()) {
            tracing::debug!(line = line_no, "skipping header line");
            seen_record = true;
            continue;
        }
        seen_record = true;

        processes.push(parse_record(&fields, line_no)?);
    }

    validate_batch(&processes)?;
    tracing::debug!(processes = processes.len(), "batch parsed");
    Ok(processes)
}

/// Parses a JSON array of processes.
pub fn parse_json_batch(input: &str) -> Result<Vec<Process>> {
    let mut processes: Vec<Process> = serde_json::from_str(input)?;
    for p in &mut processes {
        p.reset_metrics();
    }
    validate_batch(&processes)?;
    Ok(processes)
}

/// Loads a batch from a file, choosing the format by extension.
pub fn load_batch(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::info!(path = %path.display(), "loading batch");

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let mut text = String::new();
        BufReader::new(file).read_to_string(&mut text)?;
        parse_json_batch(&text)
    } else {
        read_batch(BufReader::new(file))
    }
}

fn parse_record(fields: &[&str], line: usize) -> Result<Process> {
    if !(3..=4).contains(&fields.len()) {
        return Err(Error::parse(
            line,
            format!(
                "expected 3 or 4 fields (pid arrival burst [priority]), found {}",
                fields.len()
            ),
        ));
    }

    let id = fields[0]
        .parse::<u32>()
        .map_err(|_| Error::parse(line, format!("invalid pid '{}'", fields[0])))?;
    let arrival = parse_field::<i64>(fields[1], "arrival time", line)?;
    let burst = parse_field::<i64>(fields[2], "burst time", line)?;
    let priority = match fields.get(3) {
        Some(f) => parse_field::<i32>(f, "priority", line)?,
        None => 0,
    };

    Ok(Process::new(id)
        .with_arrival_time(arrival)
        .with_burst_time(burst)
        .with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str, line: usize) -> Result<T> {
    field
        .parse::<T>()
        .map_err(|_| Error::parse(line, format!("invalid {what} '{field}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_whitespace() {
        let batch = parse_batch("1 0 8 2\n2 1 4 1\n3 2 9 3\n").unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], Process::new(1).with_burst_time(8).with_priority(2));
        assert_eq!(batch[2].arrival_time, 2);
        assert_eq!(batch[2].priority, 3);
    }

    #[test]
    fn test_parse_mixed_separators_and_comments() {
        let input = "# pid arrival burst priority\n\n1:0:5:1\n2, 3, 2  # late one\n";
        let batch = parse_batch(input).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].burst_time, 5);
        assert_eq!(batch[1].arrival_time, 3);
        assert_eq!(batch[1].priority, 0);
    }

    #[test]
    fn test_parse_header_line() {
        let batch = parse_batch("pid arrival burst priority\n1 0 3 0\n").unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_mistyped_first_record_rejected() {
        let err = parse_batch("l 0 5 1\n2 1 3 2\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("pid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_only_first_line() {
        let err = parse_batch("1 0 3 0\nfoo 1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_batch("1 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_bad_number() {
        let err = parse_batch("1 0 x 2\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("burst time"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_invalid_batch() {
        let err = parse_batch("1 0 0 1\n").unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_batch("").unwrap().is_empty());
        assert!(parse_batch("# nothing here\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"id": 1, "arrival_time": 0, "burst_time": 5, "priority": 2},
            {"id": 2, "arrival_time": 1, "burst_time": 3, "waiting_time": 99}
        ]"#;
        let batch = parse_json_batch(json).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].priority, 2);
        // Stale computed fields are cleared on load
        assert_eq!(batch[1].waiting_time, 0);
    }

    #[test]
    fn test_parse_json_malformed() {
        assert!(matches!(parse_json_batch("[{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_batch("/nonexistent/schedsim/input.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_text_and_json_files() {
        let dir = std::env::temp_dir().join(format!("schedsim-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let txt = dir.join("batch.txt");
        std::fs::write(&txt, "1 0 4 1\n2 1 3 2\n").unwrap();
        let from_text = load_batch(&txt).unwrap();

        let json = dir.join("batch.json");
        std::fs::write(&json, serde_json::to_string(&from_text).unwrap()).unwrap();
        let from_json = load_batch(&json).unwrap();

        assert_eq!(from_text, from_json);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
