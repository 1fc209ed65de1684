// This file contains the code which maps graph edges onto assembled sequences, using the naming
// conventions of the supported assemblers.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use clap::ValueEnum;
use fxhash::FxHashMap;
use regex::Regex;
use std::fmt;

use crate::fastg::{EdgeId, FastgGraph};
use crate::log::warning;
use crate::misc::plural;
use crate::sequence::{NodeId, SeqNodes};


#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Assembler {
    /// MEGAHIT: edge names embed the contig's node id, no path file needed
    Megahit,
    /// SPAdes: edges are mapped to nodes using a contigs.paths or scaffolds.paths file
    Spades,
}

impl Assembler {
    pub fn needs_paths(&self) -> bool {
        matches!(self, Assembler::Spades)
    }

    pub fn header_pattern(&self) -> Regex {
        match self {
            Assembler::Megahit => Regex::new(r"^k\d+_(\d+)").unwrap(),
            Assembler::Spades => Regex::new(r"^NODE_(\d+)_").unwrap(),
        }
    }
}

impl fmt::Display for Assembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assembler::Megahit => write!(f, "megahit"),
            Assembler::Spades => write!(f, "spades"),
        }
    }
}


// Each edge's sequence nodes. An edge can belong to more than one node (SPAdes paths), so the
// nodes are kept as a list.
#[derive(Default)]
pub struct EdgeNodeMap {
    map: FxHashMap<EdgeId, Vec<NodeId>>,
}

impl EdgeNodeMap {
    pub fn add(&mut self, edge: EdgeId, node: NodeId) {
        let nodes = self.map.entry(edge).or_default();
        if !nodes.contains(&node) {
            nodes.push(node);
        }
    }

    pub fn nodes_for(&self, edge: &EdgeId) -> &[NodeId] {
        self.map.get(edge).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.map.len()
    }

    pub fn membership_count(&self) -> usize {
        self.map.values().map(|v| v.len()).sum()
    }
}


pub fn map_edges_to_nodes(assembler: Assembler, graph: &FastgGraph, seq_nodes: &SeqNodes,
                          path_lines: Option<&[String]>) -> EdgeNodeMap {
    match assembler {
        Assembler::Megahit => megahit_edge_node_map(graph, seq_nodes),
        Assembler::Spades => spades_edge_node_map(graph, seq_nodes, path_lines.unwrap_or(&[])),
    }
}


fn megahit_edge_node_map(graph: &FastgGraph, seq_nodes: &SeqNodes) -> EdgeNodeMap {
    // MEGAHIT's graph edges are named NODE_{id}_length_..., where {id} is the number from the
    // contig's k{k}_{id} header, so this is a direct lookup.
    let edge_pattern = Regex::new(r"^NODE_(\d+)_").unwrap();
    let mut edge_nodes = EdgeNodeMap::default();
    for edge in &graph.edges {
        if let Some(node) = NodeId::from_name(edge.as_str(), &edge_pattern) {
            if seq_nodes.contains(node) {
                edge_nodes.add(edge.clone(), node);
            }
        }
    }
    edge_nodes
}


fn spades_edge_node_map(graph: &FastgGraph, seq_nodes: &SeqNodes,
                        path_lines: &[String]) -> EdgeNodeMap {
    let node_pattern = Assembler::Spades.header_pattern();
    let short_to_full: FxHashMap<&str, &EdgeId> = graph.edges.iter()
        .filter_map(|e| e.short_id().map(|s| (s, e))).collect();
    let mut edge_nodes = EdgeNodeMap::default();
    let mut unknown_nodes = 0;
    let mut unresolved_edges = 0;
    for (node_name, short_ids) in parse_paths(path_lines) {
        let node = match NodeId::from_name(&node_name, &node_pattern) {
            Some(node) if seq_nodes.contains(node) => node,
            _ => { unknown_nodes += 1; continue; }
        };
        for short_id in short_ids {
            match short_to_full.get(short_id.as_str()) {
                Some(&edge) => edge_nodes.add(edge.clone(), node),
                None => unresolved_edges += 1,
            }
        }
    }
    if unknown_nodes > 0 {
        warning(&format!("{} path{} refer to nodes not in the sequence file", unknown_nodes,
                         plural(unknown_nodes)));
    }
    if unresolved_edges > 0 {
        warning(&format!("{} path entr{} refer to edges not in the graph", unresolved_edges,
                         if unresolved_edges == 1 { "y" } else { "ies" }));
    }
    edge_nodes
}


fn parse_paths(path_lines: &[String]) -> Vec<(String, Vec<String>)> {
    // A SPAdes paths file has a NODE_... line (with a trailing ' for the reverse strand) followed
    // by one or more lines of comma-separated edges like 12+,7-. A line ending in ; means the path
    // continues after a gap. Returns the node names and the short edge ids on their paths.
    let mut paths: Vec<(String, Vec<String>)> = Vec::new();
    for line in path_lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("NODE_") {
            let name = line.strip_suffix('\'').unwrap_or(line);
            paths.push((name.to_string(), Vec::new()));
            continue;
        }
        let Some((_, short_ids)) = paths.last_mut() else { continue; };
        let line = line.strip_suffix(';').unwrap_or(line);
        for entry in line.split(',') {
            let entry = entry.trim().trim_end_matches(['+', '-']);
            if !entry.is_empty() {
                short_ids.push(entry.to_string());
            }
        }
    }
    paths
}
