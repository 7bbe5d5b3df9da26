//! Segment a log's line sequence into exception records.
//!
//! Blank-line splitting breaks when a single exception's payload itself
//! contains blank lines (pretty-printed XML), so blocks are delimited by
//! angle-bracket balance instead: a block completes when the running count of
//! `<` minus `>` returns to zero. This is a heuristic, not a parser; malformed
//! input may over- or under-segment and callers are expected to tolerate that.

use crate::config::Config;
use crate::types::ExceptionRecord;

/// Iterator over the exception records of a line sequence.
///
/// Consumes the input once; stops permanently at the first sentinel line (a
/// line whose trimmed length falls in the configured range), which marks the
/// end of the error section of the log.
pub struct Segmenter<I> {
  lines: I,
  sentinel_min_len: usize,
  sentinel_max_len: usize,
  done: bool,
}

impl<I, S> Segmenter<I>
where
  I: Iterator<Item = S>,
  S: AsRef<str>,
{
  pub fn new(lines: I, config: &Config) -> Self {
    Self {
      lines,
      sentinel_min_len: config.sentinel_min_len,
      sentinel_max_len: config.sentinel_max_len,
      done: false,
    }
  }
}

/// `<` count minus `>` count for one line.
fn bracket_balance(line: &str) -> i32 {
  let mut balance = 0i32;
  for b in line.bytes() {
    match b {
      b'<' => balance += 1,
      b'>' => balance -= 1,
      _ => {}
    }
  }
  balance
}

impl<I, S> Iterator for Segmenter<I>
where
  I: Iterator<Item = S>,
  S: AsRef<str>,
{
  type Item = ExceptionRecord;

  fn next(&mut self) -> Option<ExceptionRecord> {
    if self.done {
      return None;
    }

    let mut depth = 0i32;
    let mut buffer: Vec<String> = Vec::new();

    for line in self.lines.by_ref() {
      let line = line.as_ref();
      let trimmed_len = line.trim().len();

      if (self.sentinel_min_len..=self.sentinel_max_len).contains(&trimmed_len) {
        // End-of-section marker: everything after it is trailer content. A
        // still-open buffer is a half-captured record and is dropped.
        self.done = true;
        return None;
      }

      if trimmed_len == 0 && depth == 0 {
        // Separator between blocks; inside a block blank lines are kept.
        continue;
      }

      depth += bracket_balance(line);
      buffer.push(line.to_string());

      if depth == 0 {
        return Some(ExceptionRecord::from_lines(buffer));
      }
    }

    // End of input with the block still open: dropped, not flushed.
    self.done = true;
    None
  }
}
