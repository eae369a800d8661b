use indexmap::IndexMap;

use super::types::{Edge, Graph, Side, VertexId};

/// The incidence-list mapping being edited: vertex id -> related vertex ids.
///
/// Key uniqueness and iteration order are both load-bearing. Keys become the
/// vertex sequence of the normalized graph in map order, and field removal
/// renumbers the surviving keys by their current position, so the mapping is
/// kept in an insertion-ordered map rather than a plain hash map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncList {
	fields: IndexMap<VertexId, Vec<VertexId>>,
}

impl IncList {
	/// The example mapping shown on first load.
	pub fn sample() -> Self {
		Self {
			fields: IndexMap::from([(1, vec![2, 3]), (2, vec![3]), (3, vec![])]),
		}
	}

	pub fn from_fields(fields: IndexMap<VertexId, Vec<VertexId>>) -> Self {
		Self { fields }
	}

	pub fn fields(&self) -> &IndexMap<VertexId, Vec<VertexId>> {
		&self.fields
	}

	/// Field keys in map order.
	pub fn keys(&self) -> Vec<VertexId> {
		self.fields.keys().copied().collect()
	}

	/// Append the first field's key as a new entry in `field`'s list.
	pub fn add_entry(&mut self, field: VertexId) {
		let Some(first) = self.fields.keys().next().copied() else {
			return;
		};
		if let Some(values) = self.fields.get_mut(&field) {
			values.push(first);
		}
	}

	/// Insert a new field keyed `len + 1` with an empty list.
	///
	/// The new key can collide with an existing one after removals have
	/// re-indexed the map; the map stays key-unique and the colliding field
	/// keeps its position with its list replaced.
	pub fn add_field(&mut self) {
		let key = self.fields.len() as VertexId + 1;
		self.fields.insert(key, Vec::new());
	}

	/// Remove the entry at `index` from `field`'s list.
	pub fn remove_entry(&mut self, field: VertexId, index: usize) {
		if let Some(values) = self.fields.get_mut(&field) {
			if index < values.len() {
				values.remove(index);
			}
		}
	}

	/// Drop a field, renumber the surviving keys to a contiguous `1..=N` in
	/// their prior relative order and strip every entry equal to the removed
	/// key. Entries pointing at renumbered vertices keep their old numbers,
	/// so removal shifts edge semantics for all higher-numbered vertices.
	pub fn remove_field(&mut self, field: VertexId) {
		let renumbered: IndexMap<VertexId, Vec<VertexId>> = self
			.fields
			.iter()
			.filter(|(key, _)| **key != field)
			.enumerate()
			.map(|(index, (_, values))| {
				let values = values.iter().copied().filter(|value| *value != field).collect();
				(index as VertexId + 1, values)
			})
			.collect();
		self.fields = renumbered;
	}

	/// Replace the entry at `index` in `field`'s list.
	pub fn change_entry(&mut self, field: VertexId, index: usize, value: VertexId) {
		if let Some(values) = self.fields.get_mut(&field) {
			if let Some(slot) = values.get_mut(index) {
				*slot = value;
			}
		}
	}

	/// Reset to a single empty field.
	pub fn clear(&mut self) {
		self.fields = IndexMap::from([(1, Vec::new())]);
	}

	/// Normalize into a vertex sequence plus directed edge list.
	///
	/// Keys become the vertex sequence in map order. Every stored entry
	/// emits one edge: with [`Side::Left`] the key is the tail
	/// (`key -> entry`), with [`Side::Right`] the direction is reversed.
	/// Edges are not deduplicated and targets are not validated; dangling
	/// references are resolved (or dropped) by the matrix derivations.
	pub fn to_graph(&self, side: Side) -> Graph {
		let nodes = self.fields.keys().copied().collect();
		let edges = self
			.fields
			.iter()
			.flat_map(|(key, values)| {
				values.iter().map(|value| match side {
					Side::Left => Edge::new(*key, *value),
					Side::Right => Edge::new(*value, *key),
				})
			})
			.collect();

		Graph { nodes, edges }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pairs(list: &IncList) -> Vec<(VertexId, Vec<VertexId>)> {
		list.fields().iter().map(|(k, v)| (*k, v.clone())).collect()
	}

	#[test]
	fn sample_normalizes_to_expected_graph() {
		let graph = IncList::sample().to_graph(Side::Left);

		assert_eq!(graph.nodes, vec![1, 2, 3]);
		assert_eq!(
			graph.edges,
			vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 3)]
		);
		assert!(graph.edges.iter().all(|e| e.weight.is_none()));
	}

	#[test]
	fn left_edges_come_from_key_and_its_list() {
		let list = IncList::from_fields(IndexMap::from([
			(1, vec![2, 2, 1]),
			(4, vec![7]),
			(2, vec![]),
		]));

		for edge in list.to_graph(Side::Left).edges {
			let values = &list.fields()[&edge.source];
			assert!(values.contains(&edge.target));
		}
	}

	#[test]
	fn right_side_swaps_every_edge() {
		let list = IncList::from_fields(IndexMap::from([(1, vec![2, 3, 3]), (2, vec![1])]));

		let left = list.to_graph(Side::Left);
		let right = list.to_graph(Side::Right);

		assert_eq!(left.nodes, right.nodes);
		assert_eq!(left.edges.len(), right.edges.len());
		for (l, r) in left.edges.iter().zip(&right.edges) {
			assert_eq!((l.source, l.target), (r.target, r.source));
		}
	}

	#[test]
	fn duplicates_and_self_loops_survive_normalization() {
		let list = IncList::from_fields(IndexMap::from([(1, vec![1, 2, 2])]));

		let graph = list.to_graph(Side::Left);
		assert_eq!(
			graph.edges,
			vec![Edge::new(1, 1), Edge::new(1, 2), Edge::new(1, 2)]
		);
	}

	#[test]
	fn add_entry_appends_first_key() {
		let mut list = IncList::from_fields(IndexMap::from([(5, vec![2]), (2, vec![])]));

		list.add_entry(2);
		assert_eq!(pairs(&list), vec![(5, vec![2]), (2, vec![5])]);

		list.add_entry(9); // unknown field, no-op
		assert_eq!(pairs(&list), vec![(5, vec![2]), (2, vec![5])]);
	}

	#[test]
	fn add_field_appends_next_index() {
		let mut list = IncList::sample();
		list.add_field();

		assert_eq!(list.keys(), vec![1, 2, 3, 4]);
		assert_eq!(list.fields()[&4], Vec::<VertexId>::new());
	}

	#[test]
	fn add_field_collision_keeps_position_and_replaces_list() {
		let mut list = IncList::from_fields(IndexMap::from([(1, vec![2]), (3, vec![1, 3])]));

		// len + 1 == 3 collides with the existing key 3
		list.add_field();
		assert_eq!(pairs(&list), vec![(1, vec![2]), (3, vec![])]);
	}

	#[test]
	fn remove_field_renumbers_and_strips_references() {
		let mut list = IncList::sample();
		list.remove_field(3);

		assert_eq!(pairs(&list), vec![(1, vec![2]), (2, vec![])]);
	}

	#[test]
	fn remove_field_keeps_stale_entries_pointing_at_old_numbers() {
		let mut list = IncList::sample();
		list.remove_field(1);

		// Key 3 is renumbered to 2, but the entry `3` in the first list is
		// not rewritten and now dangles.
		assert_eq!(pairs(&list), vec![(1, vec![3]), (2, vec![])]);
	}

	#[test]
	fn entry_edits_are_positional() {
		let mut list = IncList::sample();

		list.change_entry(1, 1, 1);
		assert_eq!(list.fields()[&1], vec![2, 1]);

		list.remove_entry(1, 0);
		assert_eq!(list.fields()[&1], vec![1]);

		// out-of-range positions are ignored
		list.change_entry(1, 5, 9);
		list.remove_entry(1, 5);
		assert_eq!(list.fields()[&1], vec![1]);
	}

	#[test]
	fn clear_resets_to_single_empty_field() {
		let mut list = IncList::sample();
		list.clear();

		assert_eq!(pairs(&list), vec![(1, vec![])]);
	}

	#[test]
	fn empty_mapping_normalizes_to_empty_graph() {
		let list = IncList::from_fields(IndexMap::new());
		let graph = list.to_graph(Side::Left);

		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
	}
}
