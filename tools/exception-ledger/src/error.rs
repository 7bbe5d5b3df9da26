//! Structured error types for the exception ledger.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
  #[error("cannot read {path}: {reason}")]
  InputNotFound { path: String, reason: String },

  #[error("store corrupt: {path}: {reason}")]
  StoreCorrupt { path: String, reason: String },

  #[error("invalid input: {field}: {reason}")]
  InvalidInput { field: String, reason: String },

  #[error("partition not found: {name}")]
  PartitionNotFound { name: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl LedgerError {
  pub fn input_not_found(path: &Path, reason: impl ToString) -> Self {
    Self::InputNotFound {
      path: path.display().to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn store_corrupt(path: &Path, reason: impl ToString) -> Self {
    Self::StoreCorrupt {
      path: path.display().to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn invalid_input(field: &str, reason: &str) -> Self {
    Self::InvalidInput {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn partition_not_found(name: &str) -> Self {
    Self::PartitionNotFound {
      name: name.to_string(),
    }
  }
}
