use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::neighborhood::{Neighborhood, Tier};
use super::types::GraphData;

pub const NODE_RADIUS: f64 = 7.5;
pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel, in screen pixels, after which a press is a drag.
pub const TAP_SLOP: f64 = 4.0;
const LAYOUT_STEP: f32 = 0.016;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub url: String,
	pub label: String,
	pub tier: Tier,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	current: Option<DefaultNodeIdx>,
}

impl ForceGraphState {
	/// Build the simulation, run `iterations` layout steps, then center the
	/// view on the node named `current_id`.
	pub fn new(
		data: &GraphData,
		current_id: &str,
		width: f64,
		height: f64,
		zoom: f64,
		iterations: usize,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let hood = Neighborhood::classify(data, current_id);
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					url: node.url.clone(),
					label: node.label.clone(),
					tier: hood.tier(&node.id),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let mut state = Self {
			graph,
			current: id_to_idx.get(current_id).copied(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: zoom,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			animation_running: false,
		};
		state.settle(iterations);
		state.center_on_current();
		state
	}

	/// Run the layout without drawing.
	pub fn settle(&mut self, iterations: usize) {
		for _ in 0..iterations {
			self.graph.update(LAYOUT_STEP);
		}
	}

	/// Put the current node in the middle of the viewport. Without a current
	/// node the layout origin is centered instead.
	pub fn center_on_current(&mut self) {
		let (gx, gy) = self
			.current
			.and_then(|idx| self.node_position(idx))
			.unwrap_or((0.0, 0.0));
		self.transform.x = self.width / 2.0 - gx * self.transform.k;
		self.transform.y = self.height / 2.0 - gy * self.transform.k;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Screen position of the node with the given article id.
	pub fn node_screen_position(&self, id: &str) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(self.graph_to_screen(node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Closest node within `HIT_RADIUS` of a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut best: Option<(f64, DefaultNodeIdx)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < HIT_RADIUS && best.is_none_or(|(d, _)| dist < d) {
				best = Some((dist, node.index()));
			}
		});
		best.map(|(_, idx)| idx)
	}

	fn url_of(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut url = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				url = Some(node.data.user_data.url.clone());
			}
		});
		url
	}

	/// Mouse down or touch start. Grabs the node under the pointer, or
	/// starts panning the background.
	pub fn press(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			let (nx, ny) = self.node_position(idx).unwrap_or_default();
			self.drag = DragState {
				active: true,
				moved: false,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: nx as f32,
				node_start_y: ny as f32,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	/// Pointer moved to `(x, y)`: update hover, drag or pan.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			self.hovered = self.node_at_position(x, y);
		}

		if self.drag.active {
			let (sdx, sdy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved && (sdx * sdx + sdy * sdy).sqrt() <= TAP_SLOP {
				return;
			}
			self.drag.moved = true;
			if let Some(idx) = self.drag.node_idx {
				self.animation_running = true;
				let (nx, ny) = (
					self.drag.node_start_x + (sdx / self.transform.k) as f32,
					self.drag.node_start_y + (sdy / self.transform.k) as f32,
				);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Mouse up or touch end. Returns the URL to navigate to when the press
	/// was a tap on a node rather than a drag.
	pub fn release(&mut self) -> Option<String> {
		let tapped = match (self.drag.active, self.drag.moved, self.drag.node_idx) {
			(true, false, Some(idx)) => self.url_of(idx),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		self.animation_running = false;
		tapped
	}

	/// Pointer left the canvas.
	pub fn leave(&mut self) {
		self.drag = DragState::default();
		self.animation_running = false;
		self.pan.active = false;
		self.hovered = None;
	}

	pub fn cursor(&self) -> &'static str {
		if self.hovered.is_some() {
			"pointer"
		} else {
			"default"
		}
	}

	/// Advance the simulation by one frame. The settled layout stays still
	/// unless a node is being dragged.
	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn sample() -> GraphData {
		let ids = ["home", "rust", "wasm", "leptos", "cooking"];
		GraphData {
			nodes: ids
				.iter()
				.map(|id| GraphNode {
					id: id.to_string(),
					url: format!("/notes/{id}"),
					label: id.to_string(),
				})
				.collect(),
			links: [("home", "rust"), ("rust", "wasm"), ("wasm", "leptos")]
				.iter()
				.map(|(s, t)| GraphLink {
					source: s.to_string(),
					target: t.to_string(),
				})
				.collect(),
		}
	}

	fn state(current: &str) -> ForceGraphState {
		ForceGraphState::new(&sample(), current, W, H, 1.2, 60)
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-3
	}

	#[test]
	fn nodes_carry_tiers() {
		let s = state("rust");
		let mut tiers = HashMap::new();
		s.graph.visit_nodes(|node| {
			tiers.insert(node.data.user_data.id.clone(), node.data.user_data.tier);
		});
		assert_eq!(tiers["rust"], Tier::Current);
		assert_eq!(tiers["home"], Tier::Neighbor);
		assert_eq!(tiers["wasm"], Tier::Neighbor);
		assert_eq!(tiers["leptos"], Tier::SecondDegree);
		assert_eq!(tiers["cooking"], Tier::Distant);
	}

	#[test]
	fn view_is_centered_on_current_node() {
		let s = state("wasm");
		let (x, y) = s.node_screen_position("wasm").unwrap();
		assert!(close(x, W / 2.0) && close(y, H / 2.0), "at ({x}, {y})");
		assert_eq!(s.transform.k, 1.2);
	}

	#[test]
	fn settled_layout_stays_centered() {
		let mut s = state("wasm");
		for _ in 0..120 {
			s.tick(0.016);
		}
		let (x, y) = s.node_screen_position("wasm").unwrap();
		assert!(close(x, W / 2.0) && close(y, H / 2.0), "drifted to ({x}, {y})");
	}

	#[test]
	fn simulation_runs_only_while_dragging() {
		let mut s = state("home");
		assert!(!s.animation_running);

		let (x, y) = s.node_screen_position("rust").unwrap();
		s.press(x, y);
		s.pointer_move(x + 1.0, y);
		assert!(!s.animation_running, "a tap must not wake the layout");
		s.pointer_move(x + 30.0, y);
		assert!(s.animation_running);

		s.release();
		assert!(!s.animation_running);
	}

	#[test]
	fn missing_current_centers_origin() {
		let s = state("nowhere");
		assert_eq!(s.graph_to_screen(0.0, 0.0), (W / 2.0, H / 2.0));
	}

	#[test]
	fn tap_navigates_to_node_url() {
		let mut s = state("home");
		for id in ["home", "leptos", "cooking"] {
			let (x, y) = s.node_screen_position(id).unwrap();
			s.press(x, y);
			s.pointer_move(x + 1.0, y);
			assert_eq!(s.release(), Some(format!("/notes/{id}")));
		}
	}

	#[test]
	fn drag_does_not_navigate() {
		let mut s = state("home");
		let (x, y) = s.node_screen_position("rust").unwrap();
		s.press(x, y);
		s.pointer_move(x + 40.0, y + 40.0);
		assert_eq!(s.release(), None);
		assert!(!s.drag.active);

		let (nx, ny) = s.node_screen_position("rust").unwrap();
		assert!(close(nx, x + 40.0) && close(ny, y + 40.0));
	}

	#[test]
	fn background_press_pans_without_navigating() {
		let mut s = state("home");
		// far outside the laid out graph
		s.press(-5000.0, -5000.0);
		assert!(s.pan.active);
		s.pointer_move(-4990.0, -4980.0);
		assert_eq!(s.release(), None);
		assert!(!s.pan.active);
	}

	#[test]
	fn cursor_follows_hover() {
		let mut s = state("home");
		assert_eq!(s.cursor(), "default");

		let (x, y) = s.node_screen_position("wasm").unwrap();
		s.pointer_move(x, y);
		assert_eq!(s.cursor(), "pointer");

		s.pointer_move(-5000.0, -5000.0);
		assert_eq!(s.cursor(), "default");

		s.pointer_move(x, y);
		s.leave();
		assert_eq!(s.cursor(), "default");
	}

	#[test]
	fn empty_graph_is_harmless() {
		let mut s = ForceGraphState::new(&GraphData::default(), "", W, H, 1.2, 10);
		s.press(W / 2.0, H / 2.0);
		assert_eq!(s.release(), None);
		s.tick(0.016);
	}
}
