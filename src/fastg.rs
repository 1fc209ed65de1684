// This file defines the FastgGraph struct, which holds the edges and adjacency lists declared in
// an assembly graph file.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use fxhash::FxHashMap;
use regex::Regex;
use std::fmt;
use std::path::Path;

use crate::misc::{load_file_lines, quit_with_error};


// An edge name from the graph file, with any reverse-complement marker (trailing `'`) removed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(raw: &str) -> EdgeId {
        let raw = raw.trim();
        EdgeId(raw.strip_suffix('\'').unwrap_or(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short_id(&self) -> Option<&str> {
        // SPAdes edge names look like EDGE_12_length_345_cov_6.7, and their short id is 12.
        let rest = self.0.strip_prefix("EDGE_")?;
        let digits = rest.split('_').next()?;
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(digits)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self, f) }
}


#[derive(Default)]
pub struct FastgGraph {
    pub edges: Vec<EdgeId>,  // in order of first declaration, no duplicates
    pub adjacency: FxHashMap<EdgeId, Vec<EdgeId>>,
}

impl FastgGraph {
    pub fn from_fastg_file(fastg_filename: &Path, strict: bool) -> Self {
        let fastg_lines = load_file_lines(fastg_filename);
        Self::from_fastg_lines(&fastg_lines, strict)
    }

    pub fn from_fastg_lines(fastg_lines: &[String], strict: bool) -> Self {
        // Only declaration lines (>ID:CONN,CONN;) matter. Sequence lines are ignored, as are
        // declaration lines that don't have the right shape (unless in strict mode).
        let declaration_re = Regex::new(r"^>([^:;,]+)(?::([^;]*))?;$").unwrap();
        let mut graph = FastgGraph::default();
        for (i, line) in fastg_lines.iter().enumerate() {
            let line = line.trim_end();
            if !line.starts_with('>') {
                continue;
            }
            let Some(caps) = declaration_re.captures(line) else {
                if strict {
                    quit_with_error(&format!("malformed graph declaration on line {}:\n{}",
                                             i + 1, line));
                }
                continue;
            };
            let edge = EdgeId::new(&caps[1]);
            let connections: Vec<EdgeId> = match caps.get(2) {
                Some(m) => m.as_str().split(',').filter(|c| !c.trim().is_empty())
                                                .map(EdgeId::new).collect(),
                None => Vec::new(),
            };
            graph.add_declaration(edge, connections);
        }
        graph
    }

    fn add_declaration(&mut self, edge: EdgeId, connections: Vec<EdgeId>) {
        // A forward declaration and its reverse-complement declaration share one key, so the
        // second one extends the adjacency list instead of replacing it.
        match self.adjacency.get_mut(&edge) {
            Some(existing) => existing.extend(connections),
            None => {
                self.edges.push(edge.clone());
                self.adjacency.insert(edge, connections);
            }
        }
    }

    pub fn neighbours(&self, edge: &EdgeId) -> &[EdgeId] {
        self.adjacency.get(edge).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    pub fn print_basic_graph_info(&self) {
        eprintln!("{} edges, {} links", self.edges.len(), self.link_count());
        eprintln!();
    }
}


#[cfg(test)]
mod tests {
    use crate::test_fastg::*;
    use super::*;

    fn e(name: &str) -> EdgeId {
        EdgeId::new(name)
    }

    #[test]
    fn test_edge_id_strips_marker() {
        assert_eq!(EdgeId::new("abc'"), EdgeId::new("abc"));
        assert_eq!(EdgeId::new("abc'").as_str(), "abc");
        assert_eq!(EdgeId::new("abc").as_str(), "abc");
        assert_eq!(EdgeId::new("EDGE_1_length_5_cov_2.0'").as_str(), "EDGE_1_length_5_cov_2.0");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(e("EDGE_12_length_345_cov_6.7").short_id(), Some("12"));
        assert_eq!(e("EDGE_3_length_9_cov_1.0'").short_id(), Some("3"));
        assert_eq!(e("NODE_12_length_345_cov_6.7").short_id(), None);
        assert_eq!(e("EDGE_x_length_345").short_id(), None);
    }

    #[test]
    fn test_load_two_components() {
        let graph = FastgGraph::from_fastg_lines(&get_test_fastg_1(), false);
        assert_eq!(graph.edges, vec![e("A"), e("B"), e("C"), e("D"), e("E")]);
        assert_eq!(graph.neighbours(&e("A")), &[e("B")]);
        assert_eq!(graph.neighbours(&e("B")), &[e("C"), e("A")]);
        assert_eq!(graph.neighbours(&e("C")), &[e("B")]);
        assert_eq!(graph.neighbours(&e("D")), &[e("E")]);
        assert!(graph.neighbours(&e("E")).is_empty());
        assert_eq!(graph.link_count(), 5);
    }

    #[test]
    fn test_reverse_declarations_extend() {
        let lines: Vec<String> = vec![">X:Y;", "ACGT", ">X':Z';", "ACGT", ">Y;", ">Z;"]
            .into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        assert_eq!(graph.edges, vec![e("X"), e("Y"), e("Z")]);
        assert_eq!(graph.neighbours(&e("X")), &[e("Y"), e("Z")]);
    }

    #[test]
    fn test_declaration_without_connections() {
        let lines: Vec<String> = vec![">lonely;", "ACGTACGT"].into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        assert_eq!(graph.edges, vec![e("lonely")]);
        assert!(graph.neighbours(&e("lonely")).is_empty());
        assert!(graph.adjacency.contains_key(&e("lonely'")));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let lines: Vec<String> = vec![">good:other;", ">no_terminator:good", ">;", ">bad;extra;",
                                      ">other;", "#comment"]
            .into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        assert_eq!(graph.edges, vec![e("good"), e("other")]);
    }

    #[test]
    #[should_panic(expected = "malformed graph declaration on line 2")]
    fn test_malformed_lines_strict() {
        let lines: Vec<String> = vec![">good:other;", ">no_terminator:good", ">other;"]
            .into_iter().map(String::from).collect();
        FastgGraph::from_fastg_lines(&lines, true);
    }

    #[test]
    fn test_windows_line_endings() {
        let lines: Vec<String> = vec![">A:B';\r", ">B;\r"].into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        assert_eq!(graph.edges, vec![e("A"), e("B")]);
        assert_eq!(graph.neighbours(&e("A")), &[e("B")]);
    }
}
