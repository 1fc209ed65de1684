// This file contains the code which turns edge-level connected components into clusters of
// sequence nodes and ranks them by total length.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use fxhash::{FxHashMap, FxHashSet};

use crate::assembler::EdgeNodeMap;
use crate::components::Components;
use crate::log::warning;
use crate::misc::plural;
use crate::sequence::{NodeId, SeqNodes};


#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub bin: usize,
    pub component: usize,
    pub nodes: Vec<NodeId>,  // distinct, ascending
    pub total_length: u64,
}

impl Cluster {
    pub fn bin_name(&self) -> String {
        format!("bin{}", self.bin)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn passes(&self, cutoff: u64) -> bool {
        self.total_length > cutoff
    }
}


#[derive(Default)]
pub struct Clustering {
    pub clusters: Vec<Cluster>,  // longest first, bin numbers match positions
    pub unmapped_edge_count: usize,
    pub conflicting_node_count: usize,
}

impl Clustering {
    pub fn passing(&self, cutoff: u64) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter().filter(move |c| c.passes(cutoff))
    }

    pub fn print_cluster_info(&self, cutoff: u64) {
        let pass_count = self.passing(cutoff).count();
        eprintln!("{} cluster{} containing sequences", self.clusters.len(),
                  plural(self.clusters.len()));
        eprintln!("{} cluster{} longer than {} bp", pass_count, plural(pass_count), cutoff);
        for c in self.passing(cutoff).take(10) {
            eprintln!("  {}: {} bp, {} node{} (component {})", c.bin_name(), c.total_length,
                      c.node_count(), plural(c.node_count()), c.component);
        }
        if pass_count > 10 {
            eprintln!("  ...");
        }
        eprintln!();
    }
}


pub fn build_clusters(components: &Components, edge_nodes: &EdgeNodeMap,
                      seq_nodes: &SeqNodes) -> Clustering {
    let mut clustering = Clustering::default();
    let mut node_component: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut component_nodes: Vec<Vec<NodeId>> = vec![Vec::new(); components.len()];
    let mut conflicting_nodes: FxHashSet<NodeId> = FxHashSet::default();

    for (component, members) in components.members.iter().enumerate() {
        for edge in members {
            let nodes = edge_nodes.nodes_for(edge);
            if nodes.is_empty() {
                clustering.unmapped_edge_count += 1;
                continue;
            }
            for &node in nodes {
                match node_component.get(&node) {
                    None => {
                        node_component.insert(node, component);
                        component_nodes[component].push(node);
                    }
                    Some(&c) if c == component => {}
                    Some(&c) => {
                        if conflicting_nodes.insert(node) {
                            let name = match seq_nodes.get(node) {
                                Some(seq_node) => seq_node.to_string(),
                                None => format!("node {}", node),
                            };
                            warning(&format!("{} is in components {} and {}, keeping it in {}",
                                             name, c, component, c));
                        }
                    }
                }
            }
        }
    }
    clustering.conflicting_node_count = conflicting_nodes.len();
    if clustering.unmapped_edge_count > 0 {
        warning(&format!("{} edge{} could not be mapped to a sequence",
                         clustering.unmapped_edge_count, plural(clustering.unmapped_edge_count)));
    }

    for (component, mut nodes) in component_nodes.into_iter().enumerate() {
        if nodes.is_empty() {
            continue;
        }
        nodes.sort();
        let total_length: u64 = nodes.iter().map(|&n| seq_nodes.length(n) as u64).sum();
        clustering.clusters.push(Cluster { bin: 0, component, nodes, total_length });
    }

    // Stable sort, so equal-length clusters stay in discovery order. Every cluster gets a bin
    // number, whether or not it passes the cutoff.
    clustering.clusters.sort_by(|a, b| b.total_length.cmp(&a.total_length));
    for (i, cluster) in clustering.clusters.iter_mut().enumerate() {
        cluster.bin = i;
    }
    clustering
}
