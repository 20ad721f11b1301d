use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;

/// Send the browser to a tapped node's page.
fn navigate(url: &str) {
	info!("graph: navigating to {url}");
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.location().set_href(url) {
		error!("graph: failed to navigate to {url}: {e:?}");
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, cx: i32, cy: i32) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((cx as f64 - rect.left(), cy as f64 - rect.top()))
}

/// Related-articles graph drawn on a canvas.
///
/// The layout is settled before the first frame and centered on
/// `current_id`. Zoom is fixed; tapping a node navigates to its URL.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] current_id: String,
	#[prop(default = 1.2)] zoom: f64,
	#[prop(default = 300)] layout_iterations: usize,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cursor = RwSignal::new("default");
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				error!("graph: canvas has no 2d context");
				return;
			}
		};
		let graph = data.get();
		info!(
			"graph: laying out {} nodes, {} links around {:?}",
			graph.nodes.len(),
			graph.links.len(),
			current_id
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(
			&graph,
			&current_id,
			w,
			h,
			zoom,
			layout_iterations,
		));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
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
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
			if cursor.get_untracked() != s.cursor() {
				cursor.set(s.cursor());
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let tapped = state_mu.borrow_mut().as_mut().and_then(|s| s.release());
		if let Some(url) = tapped {
			navigate(&url);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.leave();
		}
		cursor.set("default");
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some((x, y)) = canvas_point(canvas_ref, touch.client_x(), touch.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some((x, y)) = canvas_point(canvas_ref, touch.client_x(), touch.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_tm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_te = state.clone();
	let on_touchend = move |ev: TouchEvent| {
		// Keep the browser from replaying the touch as mouse events.
		ev.prevent_default();
		let tapped = state_te.borrow_mut().as_mut().and_then(|s| s.release());
		if let Some(url) = tapped {
			navigate(&url);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style:display="block"
			style:cursor=move || cursor.get()
		/>
	}
}
