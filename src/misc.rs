// This file contains miscellaneous functions used by various parts of fastg_getclusters.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use indicatif::{ProgressBar, ProgressStyle};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use std::time::Duration;


pub fn load_file_lines(filename: &Path) -> Vec<String> {
    let file = File::open(filename).unwrap_or_else(|e| {
        quit_with_error(&format!("failed to open file {}\n{}", filename.display(), e));
    });
    let reader = BufReader::new(file);
    reader.lines().map(|line_result| {
        line_result.unwrap_or_else(|e| {
            quit_with_error(&format!("failed to read line\n{}", e));
        })
    }).collect()
}


pub fn check_if_file_exists(filename: &Path) {
    // Quits with an error if the given path is not an existing file.
    if !filename.exists() {
        quit_with_error(&format!("file does not exist: {}", filename.display()));
    }
    if !filename.is_file() {
        quit_with_error(&format!("{} is not a file", filename.display()));
    }
}


pub fn check_if_dir_exists(dir: &Path) {
    // Quits with an error if the given path is not an existing directory.
    if !dir.exists() {
        quit_with_error(&format!("directory does not exist: {}", dir.display()));
    }
    if !dir.is_dir() {
        quit_with_error(&format!("{} is not a directory", dir.display()));
    }
}


#[cfg(not(test))]
pub fn quit_with_error(text: &str) -> ! {
    // For friendly error messages, this function normally just prints the error and quits.
    eprintln!();
    eprintln!("Error: {}", text);
    std::process::exit(1);
}
#[cfg(test)]
pub fn quit_with_error(text: &str) -> ! {
    // But when running unit tests, this function instead panics so I can catch it for the test.
    panic!("{}", text);
}


pub fn load_fasta(filename: &Path) -> Vec<(String, String)> {
    // Loads a FASTA file (gzipped or not) and returns header+sequence tuples. Headers have the
    // leading '>' removed and sequences are upper case.
    let load_result = if is_file_gzipped(filename) {
        File::open(filename).and_then(|f| read_fasta(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        File::open(filename).and_then(|f| read_fasta(BufReader::new(f)))
    };
    let fasta_seqs = match load_result {
        Ok(seqs) => seqs,
        Err(e) => quit_with_error(&format!("unable to load {}\n{}", filename.display(), e)),
    };
    if fasta_seqs.is_empty() {
        quit_with_error(&format!("{} contains no sequences", filename.display()));
    }
    fasta_seqs
}


fn read_fasta<R: BufRead>(reader: R) -> io::Result<Vec<(String, String)>> {
    let mut fasta_seqs = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        let text = line.trim_end();
        if text.is_empty() { continue; }
        if let Some(h) = text.strip_prefix('>') {
            if let Some(prev) = header.take() {
                sequence.make_ascii_uppercase();
                fasta_seqs.push((prev, sequence));
                sequence = String::new();
            }
            header = Some(h.to_string());
        } else {
            if header.is_none() {
                return Err(io::Error::new(io::ErrorKind::InvalidData,
                                          "sequence data found before the first header"));
            }
            sequence.push_str(text);
        }
    }
    if let Some(prev) = header {
        sequence.make_ascii_uppercase();
        fasta_seqs.push((prev, sequence));
    }
    Ok(fasta_seqs)
}


fn is_file_gzipped(filename: &Path) -> bool {
    // This function returns true if the file appears to be gzipped (based on the first two bytes)
    // and false if not. If it can't open the file, it will quit with an error message.
    let file = File::open(filename).unwrap_or_else(|e| {
        quit_with_error(&format!("unable to open {}\n{}", filename.display(), e));
    });
    let mut reader = BufReader::new(file);
    let mut buf = vec![0u8; 2];
    match reader.read_exact(&mut buf) {
        Ok(_) => buf[0] == 31 && buf[1] == 139,
        Err(_) => false,
    }
}


pub fn format_duration(duration: std::time::Duration) -> String {
    let microseconds = duration.as_micros() % 1000000;
    let seconds =      duration.as_micros() / 1000000 % 60;
    let minutes =      duration.as_micros() / 1000000 / 60 % 60;
    let hours =        duration.as_micros() / 1000000 / 60 / 60;
    format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, microseconds)
}


pub fn spinner(message: &str) -> ProgressBar {
    if cfg!(test) {
        ProgressBar::hidden() // don't show a spinner during unit tests
    } else {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠚", "⠞", "⠖", "⠦", "⠴", "⠲", "⠳", "⠓"])
                .template("{spinner} {msg}").unwrap(),
        );
        pb.set_message(message.to_string());
        pb
    }
}


pub fn up_to_first_space(string: &str) -> String {
    string.split_whitespace().next().unwrap_or("").to_string()
}


pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
