//! Two-hop highlighting around the current article.

use std::collections::{HashMap, HashSet};

use super::types::GraphData;

/// How a node relates to the current article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tier {
	/// The article being viewed.
	Current,
	/// Directly linked to the current article.
	Neighbor,
	/// Linked to a neighbor, but not to the current article itself.
	SecondDegree,
	/// Everything else.
	#[default]
	Distant,
}

/// Tier assignment for every node of a graph.
#[derive(Clone, Debug, Default)]
pub struct Neighborhood {
	tiers: HashMap<String, Tier>,
}

impl Neighborhood {
	/// Assign a tier to every node of `data` relative to `current_id`.
	pub fn classify(data: &GraphData, current_id: &str) -> Self {
		let known: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		let mut adjacency: HashMap<&str, HashSet<&str>> = HashMap::new();
		for link in &data.links {
			let (src, tgt) = (link.source.as_str(), link.target.as_str());
			if !known.contains(src) || !known.contains(tgt) {
				continue;
			}
			adjacency.entry(src).or_default().insert(tgt);
			adjacency.entry(tgt).or_default().insert(src);
		}

		let mut tiers: HashMap<String, Tier> = data
			.nodes
			.iter()
			.map(|n| (n.id.clone(), Tier::Distant))
			.collect();
		if !known.contains(current_id) {
			return Self { tiers };
		}

		let empty = HashSet::new();
		let neighbors = adjacency.get(current_id).unwrap_or(&empty);
		for &neighbor in neighbors {
			for &second in adjacency.get(neighbor).unwrap_or(&empty) {
				tiers.insert(second.to_string(), Tier::SecondDegree);
			}
		}
		for &neighbor in neighbors {
			tiers.insert(neighbor.to_string(), Tier::Neighbor);
		}
		tiers.insert(current_id.to_string(), Tier::Current);

		Self { tiers }
	}

	/// Tier of `id`; unknown ids are `Distant`.
	pub fn tier(&self, id: &str) -> Tier {
		self.tiers.get(id).copied().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn graph(nodes: &[&str], links: &[(&str, &str)]) -> GraphData {
		GraphData {
			nodes: nodes
				.iter()
				.map(|id| GraphNode {
					id: id.to_string(),
					url: format!("/{id}"),
					label: id.to_string(),
				})
				.collect(),
			links: links
				.iter()
				.map(|(s, t)| GraphLink {
					source: s.to_string(),
					target: t.to_string(),
				})
				.collect(),
		}
	}

	#[test]
	fn chain_gets_three_tiers() {
		// a - b - c - d - e, plus an isolated f
		let data = graph(
			&["a", "b", "c", "d", "e", "f"],
			&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
		);
		let hood = Neighborhood::classify(&data, "c");

		assert_eq!(hood.tier("c"), Tier::Current);
		assert_eq!(hood.tier("b"), Tier::Neighbor);
		assert_eq!(hood.tier("d"), Tier::Neighbor);
		assert_eq!(hood.tier("a"), Tier::SecondDegree);
		assert_eq!(hood.tier("e"), Tier::SecondDegree);
		assert_eq!(hood.tier("f"), Tier::Distant);
	}

	#[test]
	fn edge_direction_is_ignored() {
		let data = graph(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);
		let hood = Neighborhood::classify(&data, "a");

		assert_eq!(hood.tier("b"), Tier::Neighbor);
		assert_eq!(hood.tier("c"), Tier::SecondDegree);
	}

	#[test]
	fn neighbor_beats_second_degree() {
		// triangle: b and c are both direct neighbors and each other's neighbor
		let data = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
		let hood = Neighborhood::classify(&data, "a");

		assert_eq!(hood.tier("a"), Tier::Current);
		assert_eq!(hood.tier("b"), Tier::Neighbor);
		assert_eq!(hood.tier("c"), Tier::Neighbor);
	}

	#[test]
	fn self_loop_keeps_current() {
		let data = graph(&["a", "b"], &[("a", "a"), ("a", "b")]);
		let hood = Neighborhood::classify(&data, "a");

		assert_eq!(hood.tier("a"), Tier::Current);
		assert_eq!(hood.tier("b"), Tier::Neighbor);
	}

	#[test]
	fn unknown_current_leaves_everything_distant() {
		let data = graph(&["a", "b"], &[("a", "b")]);
		for current in ["", "missing"] {
			let hood = Neighborhood::classify(&data, current);
			assert_eq!(hood.tier("a"), Tier::Distant);
			assert_eq!(hood.tier("b"), Tier::Distant);
		}
	}

	#[test]
	fn dangling_links_are_skipped() {
		let data = graph(&["a", "c"], &[("a", "ghost"), ("ghost", "c")]);
		let hood = Neighborhood::classify(&data, "a");

		assert_eq!(hood.tier("c"), Tier::Distant);
		assert_eq!(hood.tier("ghost"), Tier::Distant);
	}
}
