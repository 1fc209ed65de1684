// This file contains the code for saving clusters to TSV and FASTA files.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::clusters::Clustering;
use crate::sequence::SeqNodes;


pub fn output_path(out_prefix: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", out_prefix, suffix))
}


pub fn save_cluster_summary(clustering: &Clustering, cutoff: u64, file_path: &Path)
        -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    writeln!(writer, "bin\ttotal_length\tnode_count")?;
    for c in clustering.passing(cutoff) {
        writeln!(writer, "{}\t{}\t{}", c.bin_name(), c.total_length, c.node_count())?;
    }
    writer.flush()
}


pub fn save_nodes_to_cluster(clustering: &Clustering, seq_nodes: &SeqNodes, cutoff: u64,
                             file_path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    writeln!(writer, "bin\tnode_display_name")?;
    for c in clustering.passing(cutoff) {
        for node in c.nodes.iter().filter_map(|&n| seq_nodes.get(n)) {
            writeln!(writer, "{}\t{}", c.bin_name(), node.header)?;
        }
    }
    writer.flush()
}


pub fn save_cluster_fastas(clustering: &Clustering, seq_nodes: &SeqNodes, cutoff: u64,
                           out_prefix: &str) -> io::Result<Vec<PathBuf>> {
    // One FASTA file per passing cluster, named like prefix.bin0.fasta.
    let mut file_paths = Vec::new();
    for c in clustering.passing(cutoff) {
        let file_path = output_path(out_prefix, &format!("{}.fasta", c.bin_name()));
        let mut writer = BufWriter::new(File::create(&file_path)?);
        for node in c.nodes.iter().filter_map(|&n| seq_nodes.get(n)) {
            writeln!(writer, ">{}", node.header)?;
            writeln!(writer, "{}", node.seq)?;
        }
        writer.flush()?;
        file_paths.push(file_path);
    }
    Ok(file_paths)
}


#[cfg(test)]
mod tests {
    use maplit::btreemap;
    use std::collections::BTreeMap;
    use std::fs::read_to_string;
    use tempfile::tempdir;
    use crate::assembler::Assembler;
    use crate::clusters::Cluster;
    use crate::sequence::NodeId;
    use super::*;

    fn test_seq_nodes() -> SeqNodes {
        let records = vec![("k141_1 len=300000", 300000), ("k141_2 len=200000", 200000),
                           ("k141_3 len=150000", 150000), ("k141_4 len=50", 50)]
            .into_iter().map(|(h, l)| (h.to_string(), "C".repeat(l))).collect();
        SeqNodes::from_fasta_records(records, &Assembler::Megahit.header_pattern())
    }

    fn test_clustering() -> Clustering {
        Clustering {
            clusters: vec![
                Cluster { bin: 0, component: 1, nodes: vec![NodeId(1), NodeId(2)], total_length: 500000 },
                Cluster { bin: 1, component: 0, nodes: vec![NodeId(3)], total_length: 150000 },
                Cluster { bin: 2, component: 2, nodes: vec![NodeId(4)], total_length: 50 },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("test", "clustersummary.tab"), PathBuf::from("test.clustersummary.tab"));
        assert_eq!(output_path("out/sample", "bin3.fasta"), PathBuf::from("out/sample.bin3.fasta"));
    }

    #[test]
    fn test_round_trip() {
        // The two TSV files can be parsed back into the (bin, node, length) data that made them.
        let temp_dir = tempdir().unwrap();
        let summary = temp_dir.path().join("x.clustersummary.tab");
        let nodes = temp_dir.path().join("x.nodes_to_cluster.tab");
        let clustering = test_clustering();
        let seq_nodes = test_seq_nodes();
        save_cluster_summary(&clustering, 100000, &summary).unwrap();
        save_nodes_to_cluster(&clustering, &seq_nodes, 100000, &nodes).unwrap();

        let mut bin_lengths: BTreeMap<String, (u64, usize)> = BTreeMap::new();
        let summary_text = read_to_string(&summary).unwrap();
        let mut summary_lines = summary_text.lines();
        assert_eq!(summary_lines.next(), Some("bin\ttotal_length\tnode_count"));
        for line in summary_lines {
            let parts: Vec<&str> = line.split('\t').collect();
            bin_lengths.insert(parts[0].to_string(), (parts[1].parse().unwrap(),
                                                      parts[2].parse().unwrap()));
        }
        let mut triples = Vec::new();
        let nodes_text = read_to_string(&nodes).unwrap();
        for line in nodes_text.lines().skip(1) {
            let (bin, name) = line.split_once('\t').unwrap();
            let node = NodeId::from_name(name, &Assembler::Megahit.header_pattern()).unwrap();
            triples.push((bin.to_string(), node, bin_lengths[bin].0));
        }
        assert_eq!(triples, vec![("bin0".to_string(), NodeId(1), 500000),
                                 ("bin0".to_string(), NodeId(2), 500000),
                                 ("bin1".to_string(), NodeId(3), 150000)]);
        assert_eq!(bin_lengths, btreemap!{"bin0".to_string() => (500000, 2),
                                          "bin1".to_string() => (150000, 1)});
    }

    #[test]
    fn test_node_display_names() {
        let temp_dir = tempdir().unwrap();
        let nodes = temp_dir.path().join("x.nodes_to_cluster.tab");
        save_nodes_to_cluster(&test_clustering(), &test_seq_nodes(), 0, &nodes).unwrap();
        assert_eq!(read_to_string(&nodes).unwrap(),
                   "bin\tnode_display_name\n\
                    bin0\tk141_1 len=300000\n\
                    bin0\tk141_2 len=200000\n\
                    bin1\tk141_3 len=150000\n\
                    bin2\tk141_4 len=50\n");
    }

    #[test]
    fn test_cluster_fastas() {
        let temp_dir = tempdir().unwrap();
        let prefix = temp_dir.path().join("x").display().to_string();
        let files = save_cluster_fastas(&test_clustering(), &test_seq_nodes(), 100,
                                        &prefix).unwrap();
        assert_eq!(files, vec![output_path(&prefix, "bin0.fasta"),
                               output_path(&prefix, "bin1.fasta")]);
        let bin1 = read_to_string(&files[1]).unwrap();
        assert_eq!(bin1, format!(">k141_3 len=150000\n{}\n", "C".repeat(150000)));
        let bin0 = read_to_string(&files[0]).unwrap();
        assert_eq!(bin0.lines().filter(|l| l.starts_with('>')).collect::<Vec<_>>(),
                   vec![">k141_1 len=300000", ">k141_2 len=200000"]);
        assert!(!output_path(&prefix, "bin2.fasta").exists());
    }

    #[test]
    fn test_unwritable_output() {
        let temp_dir = tempdir().unwrap();
        let summary = temp_dir.path().join("missing_dir").join("x.clustersummary.tab");
        assert!(save_cluster_summary(&test_clustering(), 0, &summary).is_err());
    }
}
