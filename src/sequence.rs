// This file defines structs for storing the assembled sequences (contigs or scaffolds) that the
// graph's edges are mapped onto.

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

use crate::log::warning;
use crate::misc::up_to_first_space;


#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn from_name(name: &str, pattern: &Regex) -> Option<NodeId> {
        // The pattern's first capture group must be the numeric node id.
        let caps = pattern.captures(name)?;
        caps.get(1)?.as_str().parse::<u64>().ok().map(NodeId)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self, f) }
}


#[derive(Clone)]
pub struct SeqNode {
    pub id: NodeId,
    pub header: String,
    pub seq: String,
}

impl SeqNode {
    pub fn length(&self) -> usize {
        self.seq.len()
    }

    pub fn contig_name(&self) -> String {
        up_to_first_space(&self.header)
    }
}

impl fmt::Display for SeqNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bp)", self.contig_name(), self.length())
    }
}


#[derive(Default)]
pub struct SeqNodes {
    pub nodes: Vec<SeqNode>,
    index: FxHashMap<NodeId, usize>,
}

impl SeqNodes {
    pub fn from_fasta_records(records: Vec<(String, String)>, header_pattern: &Regex) -> Self {
        // Headers which don't give a node id, and repeats of an already-seen node id, are skipped
        // with a warning.
        let mut seq_nodes = SeqNodes::default();
        for (header, seq) in records {
            let Some(id) = NodeId::from_name(&header, header_pattern) else {
                warning(&format!("could not get a node id from sequence header: {}", header));
                continue;
            };
            if seq_nodes.index.contains_key(&id) {
                warning(&format!("node id {} is used by more than one sequence, keeping the first",
                                 id));
                continue;
            }
            seq_nodes.index.insert(id, seq_nodes.nodes.len());
            seq_nodes.nodes.push(SeqNode { id, header, seq });
        }
        seq_nodes
    }

    pub fn get(&self, id: NodeId) -> Option<&SeqNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn length(&self, id: NodeId) -> usize {
        self.get(id).map(|n| n.length()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_length(&self) -> u64 {
        self.nodes.iter().map(|n| n.length() as u64).sum()
    }
}
