use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::engine::{Algorithm, EdgeColor, NodeColor};

use super::state::{MstCanvasState, NODE_RADIUS};

const COLOR_CANVAS: &str = "#0b1220";
const COLOR_TEXT: &str = "#e5e7eb";
const COLOR_OUTLINE: &str = "#1f2937";
const COLOR_SELECTED: &str = "#f8fafc";

fn node_fill(color: NodeColor) -> &'static str {
	match color {
		NodeColor::Idle => "#94a3b8",
		NodeColor::Visited => "#f59e0b",
	}
}

/// Stroke color and width; candidate and rejected edges are also dashed.
fn edge_stroke(color: EdgeColor) -> (&'static str, f64, bool) {
	match color {
		EdgeColor::Neutral => ("#64748b", 3.0, false),
		EdgeColor::Candidate => ("#3b82f6", 4.0, true),
		EdgeColor::Rejected => ("#ef4444", 4.0, true),
		EdgeColor::Accepted => ("#10b981", 5.0, false),
	}
}

pub fn render(state: &MstCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(COLOR_CANVAS);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_status(state, ctx);
}

fn draw_edges(state: &MstCanvasState, ctx: &CanvasRenderingContext2d) {
	let scene = state.session.scene();
	let dash = js_sys::Array::of2(&JsValue::from_f64(10.0), &JsValue::from_f64(6.0));

	for edge in state.session.graph().edges() {
		let (Some(a), Some(b)) = (state.vertices.get(edge.u), state.vertices.get(edge.v)) else {
			continue;
		};
		let (stroke, width, dashed) = edge_stroke(scene.edge_color(edge.key()));
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);
		if dashed {
			let _ = ctx.set_line_dash(&dash);
		}
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		let (mx, my) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
		ctx.set_fill_style_str(COLOR_TEXT);
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&edge.weight.to_string(), mx, my - 10.0);
	}
}

fn draw_nodes(state: &MstCanvasState, ctx: &CanvasRenderingContext2d) {
	let scene = state.session.scene();

	for (id, vertex) in state.vertices.iter().enumerate() {
		let (x, y) = (vertex.x, vertex.y);
		let highlighted = state.selection == Some(id) || state.hover == Some(id);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_fill(scene.node_color(id)));
		ctx.fill();
		ctx.set_stroke_style_str(if highlighted {
			COLOR_SELECTED
		} else {
			COLOR_OUTLINE
		});
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(COLOR_TEXT);
		ctx.set_font("bold 13px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&vertex.label, x, y);
		ctx.set_text_baseline("alphabetic");
	}
}

fn draw_status(state: &MstCanvasState, ctx: &CanvasRenderingContext2d) {
	let scene = state.session.scene();
	ctx.set_fill_style_str(COLOR_TEXT);
	ctx.set_font("14px sans-serif");
	ctx.set_text_align("left");
	let _ = ctx.fill_text(scene.status(), 16.0, state.height - 40.0);

	let totals: Vec<String> = [Algorithm::Kruskal, Algorithm::Prim]
		.into_iter()
		.filter_map(|a| scene.total(a).map(|t| format!("{}: {}", a.title(), t)))
		.collect();
	if !totals.is_empty() {
		let _ = ctx.fill_text(
			&format!("Totals — {}", totals.join(", ")),
			16.0,
			state.height - 18.0,
		);
	}
}
