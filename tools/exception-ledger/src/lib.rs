//! QA Sanity Exception Ledger — deterministic log-to-ledger aggregation.
//!
//! Segments an application log into exception blocks with a bracket-depth
//! state machine, derives a dedup identifier per block, and merges unique
//! blocks into a partitioned tabular store on disk without duplicating
//! previously recorded errors.
//!
//! No AI, no DB, no network; one log file per invocation, synchronous.

pub mod category;
pub mod config;
pub mod engine;
pub mod error;
pub mod identify;
pub mod segment;
pub mod store;
pub mod types;

pub use config::Config;
pub use engine::MergeEngine;
pub use error::LedgerError;
pub use types::{ExceptionRecord, Identifier, MergeOutcome, MergeRequest};
