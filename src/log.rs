// This file contains functions for writing formatted progress messages to stderr.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

use chrono::Local;
use colored::Colorize;


pub fn section_header(text: &str) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let date = format!("({})", now);
    eprintln!();
    eprintln!("{} {}", text.bold().bright_yellow().underline(), date.dimmed());
}


pub fn explanation(text: &str) {
    let wrapped = textwrap::fill(text, terminal_width());
    eprintln!("{}", wrapped.dimmed());
    eprintln!();
}


pub fn warning(text: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), text);
}


fn terminal_width() -> usize {
    // Wrapped text never goes wider than 100 columns, even on a wide terminal.
    match term_size::dimensions() {
        Some((w, _)) => w.clamp(40, 100),
        None => 80,
    }
}
