//! exception-ledger: merge log exceptions into the partitioned ledger file.
//!
//! Usage:
//!   exception-ledger <log_file> <store_path> <flows> <project> <dmp> <env> <tester>
//!
//! <store_path> may be a directory; the ledger is then <dir>/Exceptions.json.
//! <flows> is a number 1-7, or several separated by `|` (e.g. "1|4"); with
//! several flows, each flow reads the sibling log <FLOW_LABEL><log_file_name>
//! next to <log_file> and all merge into the same store.
//! <project> is OE or CO (case-insensitive).

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use exception_ledger::category::{self, Project};
use exception_ledger::config::Config;
use exception_ledger::engine::{sibling_flow_log, MergeEngine};
use exception_ledger::error::LedgerError;
use exception_ledger::store;
use exception_ledger::types::{MergeOutcome, MergeRequest};

fn usage() -> ! {
  eprintln!(
    "Usage: exception-ledger <log_file> <store_path> <flows 1-7, |-separated> <project OE|CO> <dmp> <env> <tester>"
  );
  process::exit(2);
}

fn run_flow(
  engine: &MergeEngine,
  base: &MergeRequest,
  flow: u8,
  multi: bool,
) -> Result<MergeOutcome, LedgerError> {
  let mut req = base.clone();
  req.flow = flow;
  if multi {
    req.log_path = sibling_flow_log(&base.log_path, category::flow_label(flow)?);
  }
  engine.run(&req)
}

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  if args.len() != 7 {
    usage();
  }

  let flows = match category::parse_flows(&args[2]) {
    Ok(f) => f,
    Err(e) => {
      eprintln!("exception-ledger: {}", e);
      usage();
    }
  };
  let project = match Project::from_str_loose(&args[3]) {
    Some(p) => p,
    None => {
      eprintln!("exception-ledger: project must be OE or CO");
      usage();
    }
  };

  let config = Config::default();
  let store_path = store::resolve_store_path(Path::new(&args[1]), &config);
  let engine = MergeEngine::new(config);

  let base = MergeRequest {
    log_path: PathBuf::from(&args[0]),
    store_path: store_path.clone(),
    flow: flows[0],
    project,
    dmp: args[4].trim().to_string(),
    environment: args[5].trim().to_string(),
    tester: args[6].trim().to_string(),
  };

  let multi = flows.len() > 1;
  let mut exit_code = 0;
  for &flow in &flows {
    match run_flow(&engine, &base, flow, multi) {
      Ok(outcome) => {
        println!(
          "{}: {} records scanned, {} inserted, {} already present",
          outcome.sheet, outcome.scanned, outcome.inserted, outcome.skipped
        );
      }
      Err(e) => {
        eprintln!("exception-ledger: {}", e);
        exit_code = 1;
      }
    }
  }

  if exit_code == 0 {
    println!("Logs processed and saved to {}", store_path.display());
  }
  process::exit(exit_code);
}
