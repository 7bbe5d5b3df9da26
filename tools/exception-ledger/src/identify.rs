//! Derive a deduplication identifier from an exception record.

use crate::types::{ExceptionRecord, Identifier};

const GROUP_ID_MARKER: &str = "GROUP ID = ";

/// Compute the dedup key for a record. Pure, total over any record.
///
/// Priority order:
/// 1. the whitespace-delimited token following `"GROUP ID = "` anywhere in
///    the joined text;
/// 2. the second line when non-blank: the whole line when it mentions
///    `Exception`, else the part before the first occurrence of `line`;
/// 3. the third line verbatim.
///
/// Real-world stack-trace-like blocks are not uniformly shaped; this fallback
/// chain grabs the most stable identifying fragment without requiring a
/// structured log format. A record too short for the matching rule yields an
/// empty identifier, which substring-matches every stored row, so such
/// records never land in a non-empty partition.
pub fn identify(record: &ExceptionRecord) -> Identifier {
  let text = record.text();
  if let Some(pos) = text.find(GROUP_ID_MARKER) {
    let token = text[pos + GROUP_ID_MARKER.len()..]
      .split_whitespace()
      .next()
      .unwrap_or("");
    return Identifier(token.to_string());
  }

  let second = record.lines().get(1).map(|l| l.trim()).unwrap_or("");
  if !second.is_empty() {
    if second.contains("Exception") {
      return Identifier(second.to_string());
    }
    let head = match second.find("line") {
      Some(pos) => &second[..pos],
      None => second,
    };
    return Identifier(head.trim().to_string());
  }

  let third = record.lines().get(2).map(|l| l.as_str()).unwrap_or("");
  Identifier(third.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(lines: &[&str]) -> ExceptionRecord {
    ExceptionRecord::from_lines(lines.iter().map(|l| l.to_string()).collect())
  }

  #[test]
  fn group_id_token_wins_over_everything() {
    let rec = record(&[
      "request failed <req",
      "java.lang.NullPointerException: boom",
      "GROUP ID = 42 foo",
      "/req>",
    ]);
    assert_eq!(identify(&rec).0, "42");
  }

  #[test]
  fn group_id_token_stops_at_whitespace() {
    let rec = record(&["header", "GROUP ID = AB12\tretry scheduled"]);
    assert_eq!(identify(&rec).0, "AB12");
  }

  #[test]
  fn group_id_with_no_token_yields_empty_key() {
    let rec = record(&["header", "GROUP ID = "]);
    assert_eq!(identify(&rec).0, "");
  }

  #[test]
  fn second_line_with_exception_is_taken_whole() {
    let rec = record(&[
      "request failed <req",
      "java.lang.NullPointerException: boom at line 44",
      "/req>",
    ]);
    assert_eq!(identify(&rec).0, "java.lang.NullPointerException: boom at line 44");
  }

  #[test]
  fn second_line_without_exception_is_cut_before_line() {
    let rec = record(&["boom <trace", "ORA-00060 deadlock at line 44", "/trace>"]);
    assert_eq!(identify(&rec).0, "ORA-00060 deadlock at");
  }

  #[test]
  fn second_line_without_line_word_is_taken_whole_trimmed() {
    let rec = record(&["boom <trace", "  ORA-00001 unique constraint  ", "/trace>"]);
    assert_eq!(identify(&rec).0, "ORA-00001 unique constraint");
  }

  #[test]
  fn blank_second_line_falls_back_to_third() {
    let rec = record(&["boom <trace", "   ", "caused by timeout", "/trace>"]);
    assert_eq!(identify(&rec).0, "caused by timeout");
  }

  #[test]
  fn short_records_yield_empty_key() {
    assert_eq!(identify(&record(&["only one line"])).0, "");
    assert_eq!(identify(&record(&["first <", ""])).0, "");
  }
}
