//! Resolve (flow, project) pairs to store partition names.

use crate::error::LedgerError;

/// Product line selector. Parsed case-insensitively from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
  Oe,
  Co,
}

impl Project {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_uppercase().as_str() {
      "OE" => Some(Self::Oe),
      "CO" => Some(Self::Co),
      _ => None,
    }
  }

  pub fn suffix(self) -> &'static str {
    match self {
      Self::Oe => "OE",
      Self::Co => "CO",
    }
  }
}

/// Business-process labels indexed by flow number minus one.
const FLOW_LABELS: [&str; 7] = ["NC", "COS", "CE", "RP", "Move", "Bulk", "SU"];

/// Label for a flow number (1..=7).
pub fn flow_label(flow: u8) -> Result<&'static str, LedgerError> {
  flow
    .checked_sub(1)
    .and_then(|i| FLOW_LABELS.get(i as usize))
    .copied()
    .ok_or_else(|| LedgerError::invalid_input("flow", "expected a value in 1..=7"))
}

/// Partition name receiving records for this (flow, project) pair.
pub fn sheet_name(flow: u8, project: Project) -> Result<String, LedgerError> {
  Ok(format!("{} - {}", flow_label(flow)?, project.suffix()))
}

/// All 14 partition names, used to seed a brand-new store.
pub fn all_sheet_names() -> Vec<String> {
  let mut names = Vec::with_capacity(FLOW_LABELS.len() * 2);
  for label in FLOW_LABELS {
    for project in [Project::Oe, Project::Co] {
      names.push(format!("{} - {}", label, project.suffix()));
    }
  }
  names
}

/// Parse a `|`-separated flow list (e.g. "1|4|5"); every entry must be 1..=7.
pub fn parse_flows(s: &str) -> Result<Vec<u8>, LedgerError> {
  let mut flows = Vec::new();
  for part in s.split('|') {
    let flow: u8 = part
      .trim()
      .parse()
      .map_err(|_| LedgerError::invalid_input("flow", "expected a number in 1..=7"))?;
    flow_label(flow)?;
    flows.push(flow);
  }
  Ok(flows)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sheet_names_for_known_flows() {
    assert_eq!(sheet_name(1, Project::Oe).unwrap(), "NC - OE");
    assert_eq!(sheet_name(2, Project::Co).unwrap(), "COS - CO");
    assert_eq!(sheet_name(5, Project::Co).unwrap(), "Move - CO");
    assert_eq!(sheet_name(7, Project::Oe).unwrap(), "SU - OE");
  }

  #[test]
  fn flow_out_of_range_is_invalid_input() {
    for flow in [0u8, 8, 200] {
      let err = sheet_name(flow, Project::Oe).unwrap_err();
      assert!(err.to_string().contains("flow"), "got: {}", err);
    }
  }

  #[test]
  fn project_parses_case_insensitively() {
    assert_eq!(Project::from_str_loose("oe"), Some(Project::Oe));
    assert_eq!(Project::from_str_loose(" Co "), Some(Project::Co));
    assert_eq!(Project::from_str_loose("OE"), Some(Project::Oe));
    assert_eq!(Project::from_str_loose("xx"), None);
    assert_eq!(Project::from_str_loose(""), None);
  }

  #[test]
  fn fourteen_partition_names_total() {
    let names = all_sheet_names();
    assert_eq!(names.len(), 14);
    assert!(names.contains(&"NC - OE".to_string()));
    assert!(names.contains(&"Bulk - CO".to_string()));
    // Every resolvable pair appears in the seed list.
    for flow in 1..=7u8 {
      for project in [Project::Oe, Project::Co] {
        assert!(names.contains(&sheet_name(flow, project).unwrap()));
      }
    }
  }

  #[test]
  fn parse_flows_accepts_pipe_separated_list() {
    assert_eq!(parse_flows("3").unwrap(), vec![3]);
    assert_eq!(parse_flows("1|4|5").unwrap(), vec![1, 4, 5]);
    assert_eq!(parse_flows(" 2 | 6 ").unwrap(), vec![2, 6]);
  }

  #[test]
  fn parse_flows_rejects_bad_entries() {
    assert!(parse_flows("9").is_err());
    assert!(parse_flows("1|0").is_err());
    assert!(parse_flows("x").is_err());
    assert!(parse_flows("").is_err());
  }
}
