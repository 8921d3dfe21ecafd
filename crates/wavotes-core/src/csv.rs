//! Quote-aware CSV tokenizer
//!
//! The files this reads are small and written by a single known producer,
//! so the tokenizer works line by line instead of implementing full
//! RFC 4180. A comma splits fields only when an even number of double
//! quotes precedes it on the same line. Quoted fields therefore cannot
//! span lines.
//!
//! Rows whose field count differs from the header are dropped with a
//! warning instead of failing the whole parse.
//!
//! # Example
//!
//! ```
//! use wavotes_core::csv::parse_csv;
//!
//! let parsed = parse_csv("id,name\n1,\"Repeal, in part\"\n");
//! assert_eq!(parsed.headers, vec!["id", "name"]);
//! assert_eq!(parsed.rows[0].get("name"), Some("Repeal, in part"));
//! ```

use crate::types::Record;
use tracing::{debug, warn};

/// Result of tokenizing one CSV document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    /// Column names from the first non-empty line
    pub headers: Vec<String>,
    /// Accepted data rows in file order
    pub rows: Vec<Record>,
    /// Number of rows discarded for having the wrong field count
    pub dropped: usize,
}

/// Tokenize `text` into a header and records keyed by header name.
///
/// A leading UTF-8 byte order mark is ignored. Blank and whitespace-only
/// lines are ignored and do not count toward line numbers. Input with
/// fewer than two non-empty lines produces an empty result, headers
/// included.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    if lines.len() < 2 {
        debug!("CSV input has {} non-empty lines, nothing to parse", lines.len());
        return ParsedCsv::default();
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().replace('"', ""))
        .collect();

    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut dropped = 0;

    for (index, line) in lines.iter().enumerate().skip(1) {
        let fields = split_fields(line);

        if fields.len() != headers.len() {
            warn!(
                "Skipping malformed CSV line {}: expected {} fields, found {}",
                index + 1,
                headers.len(),
                fields.len()
            );
            dropped += 1;
            continue;
        }

        let record: Record = headers
            .iter()
            .cloned()
            .zip(fields.into_iter().map(clean_value))
            .collect();
        rows.push(record);
    }

    ParsedCsv {
        headers,
        rows,
        dropped,
    }
}

/// Split a data line on commas that sit outside double quotes.
///
/// Quotes are left in place; [`clean_value`] strips them afterwards.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(&line[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    fields
}

/// Trim a raw field and remove one pair of wrapping double quotes.
///
/// Inside a wrapped value, doubled quotes (`""`) collapse to one, which
/// is how the producer escapes a literal quote. Unwrapped values are only
/// trimmed.
pub fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_comma_inside_quotes_is_not_a_split() {
        let fields = split_fields(r#""1","Resolution, on Peace","1700000000""#);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], r#""Resolution, on Peace""#);
    }

    #[test]
    fn test_single_matching_row() {
        let parsed = parse_csv("id,title,promoted\n7,Hello,1700000000\n");
        assert_eq!(parsed.headers, vec!["id", "title", "promoted"]);
        assert_eq!(parsed.rows.len(), 1);

        let record = &parsed.rows[0];
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("id"), Some("7"));
        assert_eq!(record.get("title"), Some("Hello"));
        assert_eq!(record.get("promoted"), Some("1700000000"));
    }

    #[test]
    fn test_mismatched_row_is_dropped() {
        let parsed = parse_csv("id,title\n1,A\n2,B,extra\n3\n4,D\n");
        let ids: Vec<_> = parsed.rows.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(parsed.dropped, 2);
    }

    #[test]
    fn test_mismatched_row_warning_names_line_and_counts() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let parsed =
            tracing::subscriber::with_default(subscriber, || parse_csv("id,t\n1,a\n2,b,c\n"));
        assert_eq!(parsed.dropped, 1);

        let output = logs.contents();
        assert!(output.contains("WARN"), "no warning in: {output}");
        assert!(output.contains("line 3: expected 2 fields, found 3"), "got: {output}");
    }

    #[test]
    fn test_byte_order_mark_is_not_part_of_first_header() {
        let parsed = parse_csv("\u{feff}id,promoted\n1,0\n");
        assert_eq!(parsed.headers, vec!["id", "promoted"]);
        assert_eq!(parsed.rows[0].get("id"), Some("1"));
    }

    #[test]
    fn test_fewer_than_two_lines_is_empty() {
        assert_eq!(parse_csv(""), ParsedCsv::default());
        assert_eq!(parse_csv("   \n\n"), ParsedCsv::default());

        let header_only = parse_csv("id,title\n");
        assert!(header_only.headers.is_empty());
        assert!(header_only.rows.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let parsed = parse_csv("\nid,name\n\n  \n1,a\n\n2,b\n");
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.dropped, 0);
    }

    #[test]
    fn test_header_quotes_and_whitespace_removed() {
        let parsed = parse_csv("\"id\" , \"na\"\"me\"\n1,x\n");
        assert_eq!(parsed.headers, vec!["id", "name"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_csv("id,name\r\n1,alpha\r\n");
        assert_eq!(parsed.headers, vec!["id", "name"]);
        assert_eq!(parsed.rows[0].get("name"), Some("alpha"));
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  plain  "), "plain");
        assert_eq!(clean_value(" \"quoted\" "), "quoted");
        assert_eq!(clean_value("\"\""), "");
        assert_eq!(clean_value("\""), "\"");
        assert_eq!(clean_value("\"say \"\"hi\"\"\""), "say \"hi\"");
        // Only a wrapping pair is removed
        assert_eq!(clean_value("a\"b\""), "a\"b\"");
    }

    #[test]
    fn test_escaped_quotes_inside_field() {
        let parsed = parse_csv("id,name\n1,\"The \"\"Free\"\" Trade, Act\"\n");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].get("name"), Some("The \"Free\" Trade, Act"));
    }

    #[test]
    fn test_empty_trailing_fields() {
        let parsed = parse_csv("nation_id,1,2\nalpha,1,\n");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].get("2"), Some(""));
    }
}
