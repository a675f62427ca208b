use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::engine::Result;
use crate::engine::input::{parse_start_vertex, parse_vertex_count};

use super::render;
use super::state::MstCanvasState;

type SharedState = Rc<RefCell<Option<MstCanvasState>>>;

/// Runs `f` against the canvas state, showing any error in the status line.
fn act(state: &SharedState, f: impl FnOnce(&mut MstCanvasState) -> Result<()>) {
	if let Some(ref mut s) = *state.borrow_mut() {
		if let Err(err) = f(s) {
			s.session.report(err);
		}
	}
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

#[component]
pub fn MstCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = 700)] step_interval_ms: u64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	let (vertex_count, set_vertex_count) = signal("5".to_string());
	let (weight, set_weight) = signal("1".to_string());
	let (start, set_start) = signal("0".to_string());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			(
				window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(900.0),
				window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.filter(|w| *w > 0.0)
						.unwrap_or(900.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.filter(|h| *h > 0.0)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("Canvas 2d context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(MstCanvasState::new(
			Duration::from_millis(step_interval_ms),
			w,
			h,
		));
		info!("MST canvas ready ({}x{})", w, h);

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = (
					win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(900.0),
					win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.frame(now);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);
		let weight = weight.get_untracked();
		act(&state_md, |s| s.click(x, y, &weight));
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.vertex_at(x, y);
			s.set_hover(hovered);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	let state_count = state.clone();
	let on_set_count = move |_: MouseEvent| {
		let text = vertex_count.get_untracked();
		act(&state_count, |s| s.set_vertex_count(parse_vertex_count(&text)?));
	};

	let state_sample = state.clone();
	let on_sample = move |_: MouseEvent| act(&state_sample, |s| s.load_sample());

	let state_kruskal = state.clone();
	let on_kruskal = move |_: MouseEvent| {
		let text = start.get_untracked();
		act(&state_kruskal, |s| {
			let n = s.session.graph().vertex_count();
			let from = if text.trim().is_empty() {
				None
			} else {
				Some(parse_start_vertex(&text, n)?)
			};
			s.session.run_kruskal(from)
		});
	};

	let state_prim = state.clone();
	let on_prim = move |_: MouseEvent| {
		let text = start.get_untracked();
		act(&state_prim, |s| {
			let from = parse_start_vertex(&text, s.session.graph().vertex_count())?;
			s.session.run_prim(from)
		});
	};

	let state_both = state.clone();
	let on_both = move |_: MouseEvent| {
		let text = start.get_untracked();
		act(&state_both, |s| {
			let from = parse_start_vertex(&text, s.session.graph().vertex_count())?;
			s.session.run_both(from)
		});
	};

	let state_reset = state.clone();
	let on_reset = move |_: MouseEvent| {
		act(&state_reset, |s| {
			s.session.reset_colors();
			Ok(())
		})
	};

	let state_toggle = state.clone();
	let on_toggle = move |_: MouseEvent| {
		act(&state_toggle, |s| {
			s.session.toggle_play();
			Ok(())
		})
	};

	let state_rewind = state.clone();
	let on_rewind = move |_: MouseEvent| {
		act(&state_rewind, |s| {
			s.session.rewind();
			Ok(())
		})
	};

	let state_prev = state.clone();
	let on_prev = move |_: MouseEvent| {
		act(&state_prev, |s| {
			s.session.step_backward();
			Ok(())
		})
	};

	let state_next = state.clone();
	let on_next = move |_: MouseEvent| {
		act(&state_next, |s| {
			s.session.step_forward();
			Ok(())
		})
	};

	view! {
		<div class="mst-visualizer">
			<div class="mst-canvas-wrap">
				<canvas
					node_ref=canvas_ref
					class="mst-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
					style="display: block; cursor: pointer;"
				/>
			</div>
			<aside class="mst-sidebar">
				<label>
					"Vertices "
					<input
						type="number"
						min="1"
						prop:value=vertex_count
						on:input=move |ev| set_vertex_count.set(event_target_value(&ev))
					/>
				</label>
				<button on:click=on_set_count>"Set vertex count"</button>
				<button on:click=on_sample>"Load sample graph"</button>
				<label>
					"Edge weight "
					<input
						type="number"
						min="0"
						step="any"
						prop:value=weight
						on:input=move |ev| set_weight.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Start vertex "
					<input
						type="number"
						min="0"
						prop:value=start
						on:input=move |ev| set_start.set(event_target_value(&ev))
					/>
				</label>
				<button on:click=on_kruskal>"Run Kruskal"</button>
				<button on:click=on_prim>"Run Prim"</button>
				<button on:click=on_both>"Run both (Kruskal then Prim)"</button>
				<button on:click=on_reset>"Reset colors"</button>
				<div class="mst-transport">
					<button on:click=on_rewind>"Rewind"</button>
					<button on:click=on_prev>"Previous"</button>
					<button on:click=on_toggle>"Play / Pause"</button>
					<button on:click=on_next>"Next"</button>
				</div>
				<p class="mst-legend">
					"Green: in MST. Blue: considered. Red: rejected. Amber: visited."
				</p>
			</aside>
		</div>
	}
}
