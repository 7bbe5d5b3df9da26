//! Persistent tabular store: named partitions of `[Seq, Exception, DMP, ENV,
//! Tester]` rows, serialized as one JSON file.
//!
//! Lifecycle per run is load → mutate → overwrite: `save` is the only write
//! and happens at most once, so any failure before it leaves the file as the
//! previous run left it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category;
use crate::config::Config;
use crate::error::LedgerError;
use crate::types::Identifier;

/// Column labels of every partition's header row.
pub const COLUMNS: [&str; 5] = ["S.No.", "Exception", "DMP", "ENV", "Tester"];

/// Visual formatting carried by a data row. Copied from the partition
/// template whenever a row is written, so a reused slot looks the same as an
/// appended one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowFormat {
  pub height_points: f32,
  pub wrap_text: bool,
  pub vertical_align_top: bool,
}

/// Header and column styling of one partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetStyle {
  pub header_fill_rgb: String,
  pub header_bold: bool,
  pub exception_col_chars: u32,
}

/// One data row. The exception text is the lookup key space for dedup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
  pub seq: u32,
  pub exception: String,
  pub dmp: String,
  pub environment: String,
  pub tester: String,
  pub format: RowFormat,
}

impl Row {
  /// Blank means every tracked column is empty; seq is not tracked.
  pub fn is_blank(&self) -> bool {
    self.exception.is_empty()
      && self.dmp.is_empty()
      && self.environment.is_empty()
      && self.tester.is_empty()
  }
}

/// One named sheet of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
  pub name: String,
  pub columns: Vec<String>,
  pub style: SheetStyle,
  pub template: RowFormat,
  pub rows: Vec<Row>,
}

impl Partition {
  fn seeded(name: &str, config: &Config) -> Self {
    Self {
      name: name.to_string(),
      columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
      style: SheetStyle {
        header_fill_rgb: config.header_fill_rgb.clone(),
        header_bold: true,
        exception_col_chars: config.exception_col_chars,
      },
      template: RowFormat {
        height_points: config.row_height_points,
        wrap_text: true,
        vertical_align_top: true,
      },
      rows: Vec::new(),
    }
  }

  /// Substring match of `key` inside the exception-text column. Containment,
  /// not equality: a short key occurring inside a longer stored text counts
  /// as already present.
  pub fn contains_identifier(&self, key: &Identifier) -> bool {
    self.rows.iter().any(|r| r.exception.contains(key.0.as_str()))
  }

  /// Insert one record, reusing the first fully blank row before appending.
  ///
  /// The slot's formatting is overwritten from the template before data is
  /// written. Sequence number is the physical data-row position plus one at
  /// insertion time; after slot reuse numbers are only self-consistent for
  /// the current snapshot, not historically unique.
  ///
  /// Returns the 0-based data-row position written.
  pub fn insert(&mut self, text: &str, dmp: &str, environment: &str, tester: &str) -> usize {
    let pos = match self.rows.iter().position(Row::is_blank) {
      Some(i) => i,
      None => {
        self.rows.push(Row::default());
        self.rows.len() - 1
      }
    };

    let template = self.template.clone();
    let row = &mut self.rows[pos];
    row.format = template;
    row.seq = (pos + 1) as u32;
    row.exception = text.to_string();
    row.dmp = dmp.to_string();
    row.environment = environment.to_string();
    row.tester = tester.to_string();
    pos
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
  #[serde(default)]
  updated_at: Option<DateTime<Utc>>,
  partitions: Vec<Partition>,
}

/// The on-disk store. Explicit value passed through open → mutate → save; no
/// ambient state, no internal locking (callers serialize access externally).
#[derive(Debug)]
pub struct Store {
  path: PathBuf,
  file: StoreFile,
}

impl Store {
  /// Load the store at `path`, or seed a fresh one (all 14 partitions with
  /// header labels and a default template) when the file does not exist.
  pub fn open(path: &Path, config: &Config) -> Result<Self, LedgerError> {
    let file = if path.exists() {
      let contents =
        fs::read_to_string(path).map_err(|e| LedgerError::input_not_found(path, e))?;
      serde_json::from_str(&contents).map_err(|e| LedgerError::store_corrupt(path, e))?
    } else {
      StoreFile {
        updated_at: None,
        partitions: category::all_sheet_names()
          .iter()
          .map(|name| Partition::seeded(name, config))
          .collect(),
      }
    };

    Ok(Self {
      path: path.to_path_buf(),
      file,
    })
  }

  pub fn partitions(&self) -> &[Partition] {
    &self.file.partitions
  }

  /// Mutable handle to a partition. A pre-existing store is expected to carry
  /// every partition it will be asked for; a missing one is an error, not a
  /// lazy create.
  pub fn partition(&mut self, name: &str) -> Result<&mut Partition, LedgerError> {
    self
      .file
      .partitions
      .iter_mut()
      .find(|p| p.name == name)
      .ok_or_else(|| LedgerError::partition_not_found(name))
  }

  /// Serialize everything back to the store path, overwriting it. Writes a
  /// temp file and renames so a reader never observes a partial store.
  pub fn save(&mut self) -> Result<(), LedgerError> {
    self.file.updated_at = Some(Utc::now());
    let json = serde_json::to_string_pretty(&self.file)?;
    let tmp = self.path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }
}

/// A directory store argument means "fresh store mode": the ledger file goes
/// inside it under the configured basename.
pub fn resolve_store_path(arg: &Path, config: &Config) -> PathBuf {
  if arg.is_dir() {
    arg.join(&config.store_basename)
  } else {
    arg.to_path_buf()
  }
}
