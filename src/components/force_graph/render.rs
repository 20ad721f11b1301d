use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::neighborhood::Tier;
use super::state::{ForceGraphState, NODE_RADIUS};

const EDGE_WIDTH: f64 = 1.0;
const LABEL_FONT: &str = "10px sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
	pub fill: &'static str,
	pub label: &'static str,
}

pub fn node_style(tier: Tier) -> NodeStyle {
	match tier {
		Tier::Current => NodeStyle {
			fill: "#3d3d3d",
			label: "#3d3d3d",
		},
		Tier::Neighbor => NodeStyle {
			fill: "#999",
			label: "#3d3d3d",
		},
		Tier::SecondDegree => NodeStyle {
			fill: "#bbb",
			label: "#3d3d3d",
		},
		Tier::Distant => NodeStyle {
			fill: "#ccc",
			label: "#ccc",
		},
	}
}

/// Edges touching the current article are drawn dark.
pub fn edge_color(touches_current: bool) -> &'static str {
	if touches_current { "#3d3d3d" } else { "#ddd" }
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(EDGE_WIDTH);
	// Two passes so current edges are never hidden under pale ones.
	for highlighted in [false, true] {
		ctx.set_stroke_style_str(edge_color(highlighted));
		ctx.begin_path();
		state.graph.visit_edges(|n1, n2, _| {
			let touches_current = n1.data.user_data.tier == Tier::Current
				|| n2.data.user_data.tier == Tier::Current;
			if touches_current != highlighted {
				return;
			}
			ctx.move_to(n1.x() as f64, n1.y() as f64);
			ctx.line_to(n2.x() as f64, n2.y() as f64);
		});
		ctx.stroke();
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");

	// Distant nodes first, current node last, so highlighted tiers stay on top.
	for tier in [
		Tier::Distant,
		Tier::SecondDegree,
		Tier::Neighbor,
		Tier::Current,
	] {
		let style = node_style(tier);
		state.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if info.tier != tier {
				return;
			}
			let (x, y) = (node.x() as f64, node.y() as f64);

			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(style.fill);
			ctx.fill();

			ctx.set_fill_style_str(style.label);
			let _ = ctx.fill_text(&info.label, x, y - NODE_RADIUS - 4.0);
		});
	}
}
