// This file contains the code for saving a YAML file of metrics from a clustering run.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use crate::assembler::EdgeNodeMap;
use crate::clusters::Clustering;
use crate::components::Components;
use crate::fastg::FastgGraph;
use crate::sequence::SeqNodes;


#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ClusteringMetrics {
    pub graph_edge_count: u64,
    pub graph_link_count: u64,
    pub component_count: u64,
    pub sequence_count: u64,
    pub sequence_total_length: u64,
    pub mapped_edge_count: u64,
    pub unmapped_edge_count: u64,
    pub multi_component_node_count: u64,
    pub cluster_count: u64,
    pub pass_cluster_count: u64,
    pub fail_cluster_count: u64,
    pub pass_cluster_total_length: u64,
    pub pass_cluster_lengths: Vec<u64>,
}

impl ClusteringMetrics {
    pub fn new(graph: &FastgGraph, seq_nodes: &SeqNodes, edge_nodes: &EdgeNodeMap,
               components: &Components, clustering: &Clustering, cutoff: u64) -> Self {
        let pass_cluster_lengths: Vec<u64> = clustering.passing(cutoff)
            .map(|c| c.total_length).collect();
        let pass_cluster_count = pass_cluster_lengths.len() as u64;
        ClusteringMetrics {
            graph_edge_count: graph.edges.len() as u64,
            graph_link_count: graph.link_count() as u64,
            component_count: components.len() as u64,
            sequence_count: seq_nodes.len() as u64,
            sequence_total_length: seq_nodes.total_length(),
            mapped_edge_count: edge_nodes.edge_count() as u64,
            unmapped_edge_count: clustering.unmapped_edge_count as u64,
            multi_component_node_count: clustering.conflicting_node_count as u64,
            cluster_count: clustering.clusters.len() as u64,
            pass_cluster_count,
            fail_cluster_count: clustering.clusters.len() as u64 - pass_cluster_count,
            pass_cluster_total_length: pass_cluster_lengths.iter().sum(),
            pass_cluster_lengths,
        }
    }

    pub fn save_to_yaml(&self, filename: &Path) -> io::Result<()> { save_yaml(filename, self) }
}


fn save_yaml<T: Serialize>(yaml_filename: &Path, data: T) -> io::Result<()> {
    let yaml_string = serde_yaml::to_string(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut file = File::create(yaml_filename)?;
    file.write_all(yaml_string.as_bytes())?;
    Ok(())
}
