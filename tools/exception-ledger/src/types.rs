//! Core types for the exception ledger (records, identifiers, merge contracts).

use std::path::PathBuf;

use crate::category::Project;

/// A contiguous block of raw log lines representing one exception occurrence.
///
/// Created by the segmenter, consumed by one merge attempt, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRecord {
  lines: Vec<String>,
}

impl ExceptionRecord {
  pub fn from_lines(lines: Vec<String>) -> Self {
    Self { lines }
  }

  /// Constituent raw lines, in input order.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Joined form used downstream: newline-joined, outer whitespace trimmed.
  pub fn text(&self) -> String {
    self.lines.join("\n").trim().to_string()
  }
}

/// A short string key used for deduplication inside one partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

/// One merge invocation: a single log file into a single store partition.
#[derive(Debug, Clone)]
pub struct MergeRequest {
  pub log_path: PathBuf,
  pub store_path: PathBuf,
  pub flow: u8,
  pub project: Project,
  pub dmp: String,
  pub environment: String,
  pub tester: String,
}

/// What a merge run did, for caller-facing reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
  pub sheet: String,
  pub scanned: usize,
  pub inserted: usize,
  pub skipped: usize,
}
