//! Merge engine: segments a log, dedups against the store, persists once.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category;
use crate::config::Config;
use crate::error::LedgerError;
use crate::identify;
use crate::segment::Segmenter;
use crate::store::Store;
use crate::types::{MergeOutcome, MergeRequest};

/// One-shot orchestrator over segmenter, identifier and store.
///
/// Idempotent across repeated runs: every record inserted by one run is found
/// by `contains_identifier` on the next, so re-running the same log against
/// the same store inserts nothing.
pub struct MergeEngine {
  config: Config,
}

impl MergeEngine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Run one merge. The store file is written at most once, at the very end;
  /// any earlier failure leaves it untouched.
  pub fn run(&self, req: &MergeRequest) -> Result<MergeOutcome, LedgerError> {
    // Category resolution happens before any I/O.
    let sheet = category::sheet_name(req.flow, req.project)?;

    let contents = fs::read_to_string(&req.log_path)
      .map_err(|e| LedgerError::input_not_found(&req.log_path, e))?;

    let mut store = Store::open(&req.store_path, &self.config)?;
    let partition = store.partition(&sheet)?;

    let mut outcome = MergeOutcome {
      sheet,
      scanned: 0,
      inserted: 0,
      skipped: 0,
    };

    for record in Segmenter::new(contents.lines(), &self.config) {
      outcome.scanned += 1;
      let key = identify::identify(&record);
      if partition.contains_identifier(&key) {
        outcome.skipped += 1;
      } else {
        partition.insert(&record.text(), &req.dmp, &req.environment, &req.tester);
        outcome.inserted += 1;
      }
    }

    store.save()?;
    Ok(outcome)
  }
}

/// Per-flow log naming for multi-flow invocations: the sibling file
/// `<FLOW_LABEL><file_name>` next to the given log path.
pub fn sibling_flow_log(path: &Path, label: &str) -> PathBuf {
  let file_name = path
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_default();
  path.with_file_name(format!("{}{}", label.to_ascii_uppercase(), file_name))
}
