//! Matrix derivations over the normalized graph.
//!
//! Both derivations recompute from scratch on every graph change; the inputs
//! are tens of vertices at most, so there is nothing to cache.

use crate::components::inc_list::{Graph, VertexId};

/// Row/column index of `vertex`, first match by value in the node sequence.
fn position(graph: &Graph, vertex: VertexId) -> Option<usize> {
	graph.nodes.iter().position(|node| *node == vertex)
}

/// Adjacency matrix, `|V| x |V|`: cell `[i][j]` is 1 iff some edge runs from
/// vertex `i` to vertex `j`. An edge whose endpoints are not both in the node
/// sequence is skipped. Parallel edges land on the same cell, so multiplicity
/// is lost in this representation.
pub fn adjacency(graph: &Graph) -> Vec<Vec<i8>> {
	let mut matrix = vec![vec![0; graph.nodes.len()]; graph.nodes.len()];

	for edge in &graph.edges {
		let (source, target) = (position(graph, edge.source), position(graph, edge.target));
		if let (Some(source), Some(target)) = (source, target) {
			matrix[source][target] = 1;
		}
	}

	matrix
}

/// Incidence matrix, `|V| x |E|`: column `i` marks edge `i`'s tail with -1
/// and its head with 1. An edge whose endpoints are not both in the node
/// sequence writes nothing. A self-loop writes both marks into the same
/// cell, tail first, so its column ends at +1.
pub fn incidence(graph: &Graph) -> Vec<Vec<i8>> {
	let mut matrix = vec![vec![0; graph.edges.len()]; graph.nodes.len()];

	for (index, edge) in graph.edges.iter().enumerate() {
		let (source, target) = (position(graph, edge.source), position(graph, edge.target));
		if let (Some(source), Some(target)) = (source, target) {
			matrix[source][index] = -1;
			matrix[target][index] = 1;
		}
	}

	matrix
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::inc_list::{Edge, IncList, Side};

	fn graph(nodes: Vec<VertexId>, edges: Vec<(VertexId, VertexId)>) -> Graph {
		let edges = edges.into_iter().map(|(s, t)| Edge::new(s, t)).collect();
		Graph { nodes, edges }
	}

	#[test]
	fn sample_end_to_end() {
		let graph = IncList::sample().to_graph(Side::Left);

		assert_eq!(
			adjacency(&graph),
			vec![vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]
		);
		assert_eq!(
			incidence(&graph),
			vec![vec![-1, -1, 0], vec![1, 0, -1], vec![0, 1, 1]]
		);
	}

	#[test]
	fn adjacency_is_idempotent_under_duplicate_edges() {
		let base = graph(vec![1, 2], vec![(1, 2)]);
		let doubled = graph(vec![1, 2], vec![(1, 2), (1, 2)]);

		assert_eq!(adjacency(&base), adjacency(&doubled));
	}

	#[test]
	fn dimensions_follow_vertex_and_edge_counts() {
		let graph = graph(vec![1, 2, 3, 4], vec![(1, 2), (2, 1)]);

		let adj = adjacency(&graph);
		assert_eq!(adj.len(), 4);
		assert!(adj.iter().all(|row| row.len() == 4));

		let inc = incidence(&graph);
		assert_eq!(inc.len(), 4);
		assert!(inc.iter().all(|row| row.len() == 2));
	}

	#[test]
	fn unresolved_edges_are_skipped() {
		let graph = graph(vec![1, 2], vec![(1, 9), (9, 2), (2, 1)]);

		assert_eq!(adjacency(&graph), vec![vec![0, 0], vec![1, 0]]);
		// only the resolvable third edge writes its column
		assert_eq!(incidence(&graph), vec![vec![0, 0, 1], vec![0, 0, -1]]);
	}

	#[test]
	fn self_loop_column_ends_at_plus_one() {
		let graph = graph(vec![1, 2], vec![(2, 2)]);

		assert_eq!(incidence(&graph), vec![vec![0], vec![1]]);
		assert_eq!(adjacency(&graph), vec![vec![0, 0], vec![0, 1]]);
	}

	#[test]
	fn duplicate_node_ids_resolve_to_first_occurrence() {
		let graph = graph(vec![1, 1, 2], vec![(1, 2)]);

		assert_eq!(
			adjacency(&graph),
			vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 0, 0]]
		);
	}

	#[test]
	fn empty_graph_derives_empty_matrices() {
		let graph = Graph::default();

		assert!(adjacency(&graph).is_empty());
		assert!(incidence(&graph).is_empty());
	}
}
