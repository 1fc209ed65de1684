// This is the main file of fastg_getclusters and where execution starts. It handles the CLI and
// then hands the settings over to the clustering pipeline.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use std::path::PathBuf;
use clap::{Parser, crate_version};

mod assembler;
mod clusters;
mod components;
mod fastg;
mod getclusters;
mod log;
mod metrics;
mod misc;
mod report;
mod sequence;
mod test_fastg;


use assembler::Assembler;

#[derive(Parser)]
#[clap(name = "fastg_getclusters",
       version = concat!("v", crate_version!()),
       about = "group the sequences of an assembly graph into connected components, ranked by \
                total length")]
#[command(version, long_about = None)]
#[clap(arg_required_else_help = true)]
struct Cli {
    /// Assembly graph in FASTG format (required)
    #[clap(short = 'g', long = "graph", required = true)]
    graph: PathBuf,

    /// Assembled sequences (contigs or scaffolds) in FASTA format (required)
    #[clap(short = 's', long = "sequences", required = true)]
    sequences: PathBuf,

    /// Paths file for the sequences (required for --assembler spades)
    #[clap(short = 'p', long = "paths")]
    paths: Option<PathBuf>,

    /// Assembler which made the graph (required)
    #[clap(short = 'a', long = "assembler", value_enum, required = true)]
    assembler: Assembler,

    /// Prefix for output files
    #[clap(short = 'o', long = "out_prefix", default_value = "test")]
    out_prefix: String,

    /// Only report clusters with a total length greater than this
    #[clap(short = 'c', long = "cutoff", default_value = "100000")]
    cutoff: u64,

    /// Save a FASTA file of each reported cluster's sequences
    #[clap(short = 'f', long = "fasta")]
    fasta: bool,

    /// Quit with an error on malformed graph lines instead of skipping them
    #[clap(long = "strict")]
    strict: bool,
}


fn main() {
    let cli = Cli::parse();
    getclusters::getclusters(cli.graph, cli.sequences, cli.paths, cli.assembler, cli.out_prefix,
                             cli.cutoff, cli.fasta, cli.strict);
}
