// This file contains the code which runs the whole clustering pipeline: load the graph and
// sequences, map edges to sequences, find connected components, then rank and save clusters.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assembler::{Assembler, EdgeNodeMap, map_edges_to_nodes};
use crate::clusters::{Clustering, build_clusters};
use crate::components::Components;
use crate::fastg::FastgGraph;
use crate::log::{section_header, explanation, warning};
use crate::metrics::ClusteringMetrics;
use crate::misc::{check_if_dir_exists, check_if_file_exists, format_duration, load_fasta,
                  load_file_lines, plural, quit_with_error, spinner};
use crate::report::{output_path, save_cluster_fastas, save_cluster_summary,
                    save_nodes_to_cluster};
use crate::sequence::SeqNodes;


#[allow(clippy::too_many_arguments)]
pub fn getclusters(graph: PathBuf, sequences: PathBuf, paths: Option<PathBuf>,
                   assembler: Assembler, out_prefix: String, cutoff: u64, fasta: bool,
                   strict: bool) {
    let start_time = Instant::now();
    let paths = check_settings(&graph, &sequences, paths, assembler, &out_prefix);
    starting_message();
    print_settings(&graph, &sequences, &paths, assembler, &out_prefix, cutoff, fasta, strict);
    let fastg_graph = load_graph(&graph, strict);
    let seq_nodes = load_sequences(&sequences, assembler);
    let edge_nodes = map_edges(assembler, &fastg_graph, &seq_nodes, &paths);
    let components = find_components(&fastg_graph);
    let clustering = rank_clusters(&components, &edge_nodes, &seq_nodes, cutoff);
    let mut out_files = save_clusters(&clustering, &seq_nodes, cutoff, &out_prefix, fasta);
    let metrics = ClusteringMetrics::new(&fastg_graph, &seq_nodes, &edge_nodes, &components,
                                         &clustering, cutoff);
    let metrics_yaml = output_path(&out_prefix, "clustering.yaml");
    metrics.save_to_yaml(&metrics_yaml).unwrap_or_else(|e| {
        quit_with_error(&format!("failed to write {}\n{}", metrics_yaml.display(), e));
    });
    out_files.push(metrics_yaml);
    finished_message(start_time, &out_files);
}


fn check_settings(graph: &Path, sequences: &Path, paths: Option<PathBuf>, assembler: Assembler,
                  out_prefix: &str) -> Option<PathBuf> {
    // Returns the path file to use, which is None if the assembler doesn't need one.
    check_if_file_exists(graph);
    check_if_file_exists(sequences);
    if out_prefix.is_empty() {
        quit_with_error("--out_prefix cannot be empty");
    }
    if let Some(parent) = Path::new(out_prefix).parent() {
        if !parent.as_os_str().is_empty() {
            check_if_dir_exists(parent);
        }
    }
    match (assembler.needs_paths(), paths) {
        (true, Some(paths)) => {
            check_if_file_exists(&paths);
            Some(paths)
        }
        (true, None) => quit_with_error(&format!("--paths is required when using --assembler {}",
                                                 assembler)),
        (false, Some(paths)) => {
            warning(&format!("--paths {} is not used with --assembler {} and will be ignored",
                             paths.display(), assembler));
            None
        }
        (false, None) => None,
    }
}


fn starting_message() {
    section_header("Starting fastg_getclusters");
    explanation("This command loads an assembly graph in FASTG format, splits it into connected \
                 components and reports the assembled sequences in each component, ranked by \
                 their total length.");
}


#[allow(clippy::too_many_arguments)]
fn print_settings(graph: &Path, sequences: &Path, paths: &Option<PathBuf>, assembler: Assembler,
                  out_prefix: &str, cutoff: u64, fasta: bool, strict: bool) {
    eprintln!("Settings:");
    eprintln!("  --graph {}", graph.display());
    eprintln!("  --sequences {}", sequences.display());
    if let Some(paths) = paths {
        eprintln!("  --paths {}", paths.display());
    }
    eprintln!("  --assembler {}", assembler);
    eprintln!("  --out_prefix {}", out_prefix);
    eprintln!("  --cutoff {}", cutoff);
    if fasta {
        eprintln!("  --fasta");
    }
    if strict {
        eprintln!("  --strict");
    }
    eprintln!();
}


fn finished_message(start_time: Instant, out_files: &[PathBuf]) {
    section_header("Finished!");
    eprintln!("Output files:");
    for f in out_files {
        eprintln!("  {}", f.display());
    }
    eprintln!();
    eprintln!("Time to run: {}", format_duration(start_time.elapsed()));
    eprintln!();
}


fn load_graph(graph: &Path, strict: bool) -> FastgGraph {
    section_header("Loading graph");
    explanation("The graph's edges and the links between them are now loaded into memory.");
    let fastg_graph = FastgGraph::from_fastg_file(graph, strict);
    fastg_graph.print_basic_graph_info();
    if fastg_graph.edges.is_empty() {
        warning(&format!("no edges were found in {}", graph.display()));
    }
    fastg_graph
}


fn load_sequences(sequences: &Path, assembler: Assembler) -> SeqNodes {
    section_header("Loading sequences");
    explanation("The assembled sequences are now loaded and each is given a node id from its \
                 header.");
    let records = load_fasta(sequences);
    let seq_nodes = SeqNodes::from_fasta_records(records, &assembler.header_pattern());
    eprintln!("{} sequence{}, {} bp total", seq_nodes.len(), plural(seq_nodes.len()),
              seq_nodes.total_length());
    eprintln!();
    seq_nodes
}


fn map_edges(assembler: Assembler, fastg_graph: &FastgGraph, seq_nodes: &SeqNodes,
             paths: &Option<PathBuf>) -> EdgeNodeMap {
    section_header("Mapping edges to sequences");
    match paths {
        Some(_) => explanation("Each sequence's path through the graph is used to find which \
                                edges belong to which sequence."),
        None => explanation("Each edge's name contains the id of its sequence, which is used to \
                             find which edges belong to which sequence."),
    }
    let path_lines = paths.as_ref().map(|p| load_file_lines(p));
    let edge_nodes = map_edges_to_nodes(assembler, fastg_graph, seq_nodes,
                                        path_lines.as_deref());
    eprintln!("{} of {} edges mapped to sequences ({} membership{})", edge_nodes.edge_count(),
              fastg_graph.edges.len(), edge_nodes.membership_count(),
              plural(edge_nodes.membership_count()));
    eprintln!();
    edge_nodes
}


fn find_components(fastg_graph: &FastgGraph) -> Components {
    section_header("Finding connected components");
    explanation("Edges are grouped into connected components by following links in the graph.");
    let pb = spinner("finding connected components...");
    let components = Components::find(fastg_graph);
    pb.finish_and_clear();
    components.print_component_info();
    components
}


fn rank_clusters(components: &Components, edge_nodes: &EdgeNodeMap, seq_nodes: &SeqNodes,
                 cutoff: u64) -> Clustering {
    section_header("Ranking clusters");
    explanation("Each component's sequences form a cluster. Clusters are sorted by their total \
                 sequence length and numbered from longest to shortest.");
    let clustering = build_clusters(components, edge_nodes, seq_nodes);
    clustering.print_cluster_info(cutoff);
    clustering
}


fn save_clusters(clustering: &Clustering, seq_nodes: &SeqNodes, cutoff: u64, out_prefix: &str,
                 fasta: bool) -> Vec<PathBuf> {
    section_header("Saving clusters");
    explanation("Clusters longer than the cutoff are now saved to file.");
    let summary = output_path(out_prefix, "clustersummary.tab");
    let nodes = output_path(out_prefix, "nodes_to_cluster.tab");
    save_cluster_summary(clustering, cutoff, &summary).unwrap_or_else(|e| {
        quit_with_error(&format!("failed to write {}\n{}", summary.display(), e));
    });
    save_nodes_to_cluster(clustering, seq_nodes, cutoff, &nodes).unwrap_or_else(|e| {
        quit_with_error(&format!("failed to write {}\n{}", nodes.display(), e));
    });
    let mut out_files = vec![summary, nodes];
    if fasta {
        let fasta_files = save_cluster_fastas(clustering, seq_nodes, cutoff, out_prefix)
            .unwrap_or_else(|e| {
                quit_with_error(&format!("failed to write cluster FASTA files\n{}", e));
            });
        eprintln!("{} cluster FASTA file{}", fasta_files.len(), plural(fasta_files.len()));
        out_files.extend(fasta_files);
    }
    eprintln!();
    out_files
}
