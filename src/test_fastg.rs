// This file contains some graph, sequence and path files for fastg_getclusters's unit tests.

// Copyright 2024 fastg_getclusters contributors

// This file is part of fastg_getclusters. fastg_getclusters is free software: you can
// redistribute it and/or modify it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License, or (at your option) any later
// version. fastg_getclusters is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE.  See the GNU General Public License for more details. You should have received a copy
// of the GNU General Public License along with fastg_getclusters. If not, see
// <http://www.gnu.org/licenses/>.

#[cfg(test)]
pub fn get_test_fastg_1() -> Vec<String> {
    // Two connected components: A-B-C and D-E
    // Links are only partially declared (E has no links of its own)
    vec![">A:B;",
         "ACGT",
         ">B:C,A';",
         "ACGT",
         ">C:B';",
         "ACGT",
         ">D:E;",
         "ACGT",
         ">E;",
         "ACGT"].into_iter().map(String::from).collect()
}


#[cfg(test)]
pub fn get_test_fastg_2() -> Vec<String> {
    // Three connected components, every link declared in both directions
    // 1-2-3-4 with a loop back from 4 to 1
    // 5-6 with a self-loop on 6
    // 7 on its own
    vec![">1:2;", "A",
         ">1':4';", "T",
         ">2:3;", "A",
         ">2':1';", "T",
         ">3:4;", "A",
         ">3':2';", "T",
         ">4:1;", "A",
         ">4':3';", "T",
         ">5:6;", "A",
         ">5';", "T",
         ">6:6,6';", "A",
         ">6':5';", "T",
         ">7;", "A",
         ">7';", "T"].into_iter().map(String::from).collect()
}


#[cfg(test)]
pub fn get_test_megahit_fastg() -> Vec<String> {
    // Three connected components:
    // NODE_1 and NODE_2
    // NODE_3 on its own
    // NODE_4 and NODE_9 (NODE_9 has no sequence in the FASTA)
    vec![">NODE_1_length_6_cov_2.0000_ID_1:NODE_2_length_4_cov_1.0000_ID_3';",
         "ACGTAC",
         ">NODE_1_length_6_cov_2.0000_ID_1';",
         "GTACGT",
         ">NODE_2_length_4_cov_1.0000_ID_3:NODE_1_length_6_cov_2.0000_ID_1';",
         "AAAA",
         ">NODE_2_length_4_cov_1.0000_ID_3';",
         "TTTT",
         ">NODE_3_length_8_cov_3.0000_ID_5;",
         "ACGTACGT",
         ">NODE_3_length_8_cov_3.0000_ID_5';",
         "ACGTACGT",
         ">NODE_4_length_5_cov_1.0000_ID_7:NODE_9_length_3_cov_1.0000_ID_9;",
         "CCCCC",
         ">NODE_4_length_5_cov_1.0000_ID_7';",
         "GGGGG",
         ">NODE_9_length_3_cov_1.0000_ID_9;",
         "AAA",
         ">NODE_9_length_3_cov_1.0000_ID_9':NODE_4_length_5_cov_1.0000_ID_7';",
         "TTT"].into_iter().map(String::from).collect()
}


#[cfg(test)]
pub fn get_test_megahit_fasta() -> Vec<(String, String)> {
    vec![("k141_1 flag=1 multi=2.0000 len=6", "ACGTAC"),
         ("k141_2 flag=1 multi=1.0000 len=4", "AAAA"),
         ("k141_3 flag=3 multi=3.0000 len=8", "ACGTACGT"),
         ("k141_4 flag=1 multi=1.0000 len=5", "CCCCC")]
        .into_iter().map(|(h, s)| (h.to_string(), s.to_string())).collect()
}


#[cfg(test)]
pub fn get_test_megahit_fasta_text() -> String {
    get_test_megahit_fasta().into_iter().map(|(h, s)| format!(">{}\n{}\n", h, s)).collect()
}


#[cfg(test)]
pub fn get_test_spades_fastg() -> Vec<String> {
    // Three connected components:
    // EDGE_1, EDGE_2, EDGE_3 and EDGE_4 (EDGE_2 is shared by the paths of NODE_1 and NODE_2)
    // EDGE_5 on its own
    // EDGE_6 on its own (on the path of a node which isn't in the FASTA)
    vec![">EDGE_1_length_40_cov_5.0:EDGE_2_length_10_cov_8.0;",
         "ACGT",
         ">EDGE_1_length_40_cov_5.0';",
         "ACGT",
         ">EDGE_2_length_10_cov_8.0:EDGE_3_length_20_cov_9.0,EDGE_4_length_15_cov_2.0';",
         "ACGT",
         ">EDGE_2_length_10_cov_8.0':EDGE_1_length_40_cov_5.0';",
         "ACGT",
         ">EDGE_3_length_20_cov_9.0;",
         "ACGT",
         ">EDGE_3_length_20_cov_9.0':EDGE_2_length_10_cov_8.0';",
         "ACGT",
         ">EDGE_4_length_15_cov_2.0:EDGE_2_length_10_cov_8.0';",
         "ACGT",
         ">EDGE_4_length_15_cov_2.0';",
         "ACGT",
         ">EDGE_5_length_30_cov_3.0;",
         "ACGT",
         ">EDGE_5_length_30_cov_3.0';",
         "ACGT",
         ">EDGE_6_length_8_cov_1.0;",
         "ACGT",
         ">EDGE_6_length_8_cov_1.0';",
         "ACGT"].into_iter().map(String::from).collect()
}


#[cfg(test)]
pub fn get_test_spades_fasta() -> Vec<(String, String)> {
    vec![("NODE_1_length_12_cov_6.0", "ACGTACGTACGT"),
         ("NODE_2_length_6_cov_4.0", "GGGCCC"),
         ("NODE_3_length_9_cov_3.0", "TTTAAATTT")]
        .into_iter().map(|(h, s)| (h.to_string(), s.to_string())).collect()
}


#[cfg(test)]
pub fn get_test_spades_fasta_text() -> String {
    get_test_spades_fasta().into_iter().map(|(h, s)| format!(">{}\n{}\n", h, s)).collect()
}


#[cfg(test)]
pub fn get_test_spades_paths() -> Vec<String> {
    vec!["NODE_1_length_12_cov_6.0",
         "1+,2+,3+",
         "NODE_1_length_12_cov_6.0'",
         "3-,2-,1-",
         "NODE_2_length_6_cov_4.0",
         "2+;",
         "4-,99+",
         "NODE_2_length_6_cov_4.0'",
         "99-,4+;",
         "2-",
         "NODE_3_length_9_cov_3.0",
         "5+",
         "NODE_3_length_9_cov_3.0'",
         "5-",
         "NODE_7_length_8_cov_1.0",
         "6+",
         "NODE_7_length_8_cov_1.0'",
         "6-"].into_iter().map(String::from).collect()
}
