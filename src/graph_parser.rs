//! Graph text parser.
//!
//! Accepts the adjacency notations the graph views offer:
//!
//! - JSON, unweighted: `{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}`
//! - JSON, weighted: `{"A": [["B", 1], ["C", 4]]}` or `{"A": [{"to": "B", "weight": 1}]}`
//! - compact: `{A:[(B,1),(C,4)], B:[(C,2),(D,5)], C:[(D,1)], D:[]}` (bare `B` means weight 1)
//!
//! Weights are non-negative integers. Neighbours that never appear as keys become nodes
//! without outgoing edges.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{instrument, warn};

use crate::error::VisualizerError;
use crate::types::Graph;

/// Parses graph text into a [`Graph`].
#[instrument(level = "trace")]
pub fn parse_graph(text: &str) -> Result<Graph, VisualizerError> {
  let text = text.trim();
  if text.is_empty() {
    return Err(VisualizerError::InvalidGraph("empty input".to_string()));
  }
  let result = match serde_json::from_str::<serde_json::Value>(text) {
    Ok(value) => graph_from_json(value),
    Err(_) => parse_compact(text),
  };
  let graph = result.map_err(|e| {
    warn!(error = %e, "rejected graph input");
    VisualizerError::InvalidGraph(e)
  })?;
  if graph.is_empty() {
    return Err(VisualizerError::InvalidGraph("graph has no nodes".to_string()));
  }
  Ok(graph)
}

/// A neighbour entry as it may appear in JSON input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNeighbor {
  Name(String),
  Pair(String, u64),
  Object {
    to: String,
    #[serde(default = "unit_weight")]
    weight: u64,
  },
}

fn unit_weight() -> u64 {
  1
}

impl RawNeighbor {
  fn into_parts(self) -> (String, u64) {
    match self {
      RawNeighbor::Name(to) => (to, 1),
      RawNeighbor::Pair(to, weight) | RawNeighbor::Object { to, weight } => (to, weight),
    }
  }
}

/// Builds a graph from an already-parsed JSON value.
pub(crate) fn graph_from_json(value: serde_json::Value) -> Result<Graph, String> {
  if !value.is_object() {
    return Err("expected a JSON object mapping each node to its neighbours".to_string());
  }
  let raw: BTreeMap<String, Vec<RawNeighbor>> = serde_json::from_value(value)
    .map_err(|e| format!("each node must map to a list of neighbours: {e}"))?;
  let mut graph = Graph::new();
  for (node, neighbors) in raw {
    graph.add_node(node.clone());
    for neighbor in neighbors {
      let (to, weight) = neighbor.into_parts();
      graph.add_edge(node.clone(), to, weight);
    }
  }
  Ok(graph)
}

/// Parses the compact `{A:[(B,1),C], ...}` notation.
pub(crate) fn parse_compact(source: &str) -> Result<Graph, String> {
  let mut rest = expect(source, '{')?;
  let mut graph = Graph::new();
  loop {
    rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix('}') {
      if !after.trim().is_empty() {
        return Err(format!("unexpected trailing input '{}'", after.trim()));
      }
      return Ok(graph);
    }
    let (node, after) = parse_node_name(rest).ok_or("expected node name")?;
    let after = expect(after, ':')?;
    let (neighbors, after) = parse_neighbor_list(after)?;
    graph.add_node(node.clone());
    for (to, weight) in neighbors {
      graph.add_edge(node.clone(), to, weight);
    }
    rest = after.trim_start();
    if let Some(after) = rest.strip_prefix(',') {
      rest = after;
    } else if !rest.starts_with('}') {
      return Err(format!("expected ',' or '}}' after neighbours of '{node}'"));
    }
  }
}

/// Strips `c` (after leading whitespace) or reports what was found instead.
pub(crate) fn expect(s: &str, c: char) -> Result<&str, String> {
  let s = s.trim_start();
  s.strip_prefix(c).ok_or_else(|| match s.chars().next() {
    Some(found) => format!("expected '{c}', found '{found}'"),
    None => format!("expected '{c}', found end of input"),
  })
}

fn is_name_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

/// Parses a bare (`A1`, `node_2`) or double-quoted (`"New York"`) node name.
pub(crate) fn parse_node_name(s: &str) -> Option<(String, &str)> {
  let s = s.trim_start();
  if let Some(quoted) = s.strip_prefix('"') {
    let end = quoted.find('"')?;
    if end == 0 {
      return None;
    }
    return Some((quoted[..end].to_string(), &quoted[end + 1..]));
  }
  let end = s.find(|c: char| !is_name_char(c)).unwrap_or(s.len());
  if end == 0 {
    None
  } else {
    Some((s[..end].to_string(), &s[end..]))
  }
}

/// Parses a non-negative integer weight.
pub(crate) fn parse_weight(s: &str) -> Result<(u64, &str), String> {
  let s = s.trim_start();
  let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
  if end == 0 {
    return Err(match s.chars().next() {
      Some('-') => "weights must be non-negative".to_string(),
      _ => "expected integer weight".to_string(),
    });
  }
  let weight = s[..end]
    .parse()
    .map_err(|_| format!("weight '{}' is too large", &s[..end]))?;
  Ok((weight, &s[end..]))
}

/// Parses `B` or `(B, 4)`.
fn parse_neighbor(s: &str) -> Result<((String, u64), &str), String> {
  let s = s.trim_start();
  if let Some(inner) = s.strip_prefix('(') {
    let (to, rest) = parse_node_name(inner).ok_or("expected neighbour name")?;
    let rest = expect(rest, ',')?;
    let (weight, rest) = parse_weight(rest)?;
    let rest = expect(rest, ')')?;
    return Ok(((to, weight), rest));
  }
  let (to, rest) = parse_node_name(s).ok_or("expected neighbour name")?;
  Ok(((to, 1), rest))
}

/// Parses `[B, (C, 2), ...]`.
fn parse_neighbor_list(s: &str) -> Result<(Vec<(String, u64)>, &str), String> {
  let mut rest = expect(s, '[')?;
  let mut neighbors = Vec::new();
  loop {
    rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix(']') {
      return Ok((neighbors, after));
    }
    let (neighbor, after) = parse_neighbor(rest)?;
    neighbors.push(neighbor);
    rest = after.trim_start();
    if let Some(after) = rest.strip_prefix(',') {
      rest = after;
    } else if !rest.starts_with(']') {
      return Err("expected ',' or ']' in neighbour list".to_string());
    }
  }
}
