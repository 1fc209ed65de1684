// This file contains the code for splitting the graph's edges into connected components.

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

use crate::fastg::{EdgeId, FastgGraph};


// The graph's edges split into connected components. Component ids are assigned in discovery
// order, with seeds taken in the order edges were declared in the graph file.
#[derive(Default)]
pub struct Components {
    pub members: Vec<Vec<EdgeId>>,
    assignment: FxHashMap<EdgeId, usize>,
}

impl Components {
    pub fn find(graph: &FastgGraph) -> Self {
        // Links are followed in both directions, so a link only needs to be declared on one of
        // its two edges for the edges to end up together.
        let undirected = undirected_neighbours(graph);
        let mut components = Components::default();
        for edge in &graph.edges {
            if components.assignment.contains_key(edge) {
                continue;
            }
            let component_id = components.members.len();
            let mut members = Vec::new();
            let mut stack = vec![edge];
            while let Some(current) = stack.pop() {
                if components.assignment.contains_key(current) {
                    continue;
                }
                components.assignment.insert(current.clone(), component_id);
                members.push(current.clone());
                if let Some(neighbours) = undirected.get(current) {
                    for &neighbour in neighbours {
                        if !components.assignment.contains_key(neighbour) {
                            stack.push(neighbour);
                        }
                    }
                }
            }
            components.members.push(members);
        }
        components
    }

    #[cfg(test)]
    pub fn component_of(&self, edge: &EdgeId) -> Option<usize> {
        self.assignment.get(edge).copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn edge_count(&self) -> usize {
        self.assignment.len()
    }

    pub fn singleton_count(&self) -> usize {
        self.members.iter().filter(|m| m.len() == 1).count()
    }

    pub fn print_component_info(&self) {
        let largest = self.members.iter().map(|m| m.len()).max().unwrap_or(0);
        eprintln!("{} edges in {} connected components", self.edge_count(), self.len());
        eprintln!("  largest component: {} edges", largest);
        eprintln!("  single-edge components: {}", self.singleton_count());
        eprintln!();
    }
}


fn undirected_neighbours(graph: &FastgGraph) -> FxHashMap<&EdgeId, FxHashSet<&EdgeId>> {
    let mut undirected: FxHashMap<&EdgeId, FxHashSet<&EdgeId>> = FxHashMap::default();
    for edge in &graph.edges {
        for neighbour in graph.neighbours(edge) {
            undirected.entry(edge).or_default().insert(neighbour);
            undirected.entry(neighbour).or_default().insert(edge);
        }
    }
    undirected
}


#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap, HashSet};
    use crate::test_fastg::*;
    use super::*;

    fn e(name: &str) -> EdgeId {
        EdgeId::new(name)
    }

    fn partition(members: &[Vec<EdgeId>]) -> BTreeSet<BTreeSet<EdgeId>> {
        members.iter().map(|m| m.iter().cloned().collect()).collect()
    }

    fn fishing(graph: &FastgGraph) -> Vec<Vec<EdgeId>> {
        // Reference implementation: grow a bait set from each unassigned edge by sweeping over
        // the whole set and adding neighbours, until a sweep adds nothing.
        let mut assigned: HashMap<EdgeId, usize> = HashMap::new();
        let mut components = Vec::new();
        for edge in &graph.edges {
            if assigned.contains_key(edge) { continue; }
            let mut bait: HashSet<EdgeId> = HashSet::from([edge.clone()]);
            loop {
                let size_before = bait.len();
                let current: Vec<EdgeId> = bait.iter().cloned().collect();
                for member in current {
                    for neighbour in graph.neighbours(&member) {
                        bait.insert(neighbour.clone());
                    }
                }
                if bait.len() == size_before { break; }
            }
            for member in &bait {
                assigned.insert(member.clone(), components.len());
            }
            components.push(bait.into_iter().collect());
        }
        components
    }

    fn assert_complete_partition(graph: &FastgGraph, components: &Components) {
        let mut seen = HashSet::new();
        for (i, members) in components.members.iter().enumerate() {
            for edge in members {
                assert!(seen.insert(edge.clone()), "{} is in more than one component", edge);
                assert_eq!(components.component_of(edge), Some(i));
            }
        }
        for edge in &graph.edges {
            assert!(seen.contains(edge), "{} is not in any component", edge);
        }
    }

    #[test]
    fn test_two_components() {
        let graph = FastgGraph::from_fastg_lines(&get_test_fastg_1(), false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 2);
        assert_complete_partition(&graph, &components);
        assert_eq!(components.component_of(&e("A")), Some(0));
        assert_eq!(components.component_of(&e("B")), Some(0));
        assert_eq!(components.component_of(&e("C'")), Some(0));
        assert_eq!(components.component_of(&e("D")), Some(1));
        assert_eq!(components.component_of(&e("E")), Some(1));
    }

    #[test]
    fn test_seed_order_does_not_matter() {
        // The same graph with its declarations reversed gives the same partition, just with the
        // component ids swapped.
        let mut lines = get_test_fastg_1();
        lines.reverse();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 2);
        assert_eq!(components.component_of(&e("E")), Some(0));
        assert_eq!(components.component_of(&e("D")), Some(0));
        assert_eq!(components.component_of(&e("A")), Some(1));
        let forward = Components::find(&FastgGraph::from_fastg_lines(&get_test_fastg_1(), false));
        assert_eq!(partition(&components.members), partition(&forward.members));
    }

    #[test]
    fn test_link_declared_on_later_edge_only() {
        // B is only linked to A from B's own declaration, which comes after A's.
        let lines: Vec<String> = vec![">A;", ">C;", ">B:A,C;"].into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components.members[0].len(), 3);
        assert_complete_partition(&graph, &components);
    }

    #[test]
    fn test_matches_fishing() {
        let graph = FastgGraph::from_fastg_lines(&get_test_fastg_2(), false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 3);
        assert_complete_partition(&graph, &components);
        assert_eq!(partition(&components.members), partition(&fishing(&graph)));
        assert_eq!(components.component_of(&e("1")), Some(0));
        assert_eq!(components.component_of(&e("4")), Some(0));
        assert_eq!(components.component_of(&e("5")), Some(1));
        assert_eq!(components.component_of(&e("6")), Some(1));
        assert_eq!(components.component_of(&e("7")), Some(2));
    }

    #[test]
    fn test_self_loop_and_singletons() {
        let lines: Vec<String> = vec![">X:X,X';", ">Y;", ">Z:Z;"].into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 3);
        assert_eq!(components.singleton_count(), 3);
        assert_eq!(components.members, vec![vec![e("X")], vec![e("Y")], vec![e("Z")]]);
    }

    #[test]
    fn test_undeclared_neighbour() {
        // Q is referenced but never declared, and it still gets a component.
        let lines: Vec<String> = vec![">P:Q;", ">R;"].into_iter().map(String::from).collect();
        let graph = FastgGraph::from_fastg_lines(&lines, false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 2);
        assert_eq!(components.component_of(&e("Q")), Some(0));
        assert_eq!(components.edge_count(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let graph = FastgGraph::from_fastg_lines(&[], false);
        let components = Components::find(&graph);
        assert_eq!(components.len(), 0);
        assert_eq!(components.edge_count(), 0);
    }
}
