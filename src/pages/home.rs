use leptos::prelude::*;

use crate::components::mst_canvas::MstCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="visualizer-page">
				<div class="graph-overlay">
					<h1>"MST Visualizer: Kruskal and Prim"</h1>
					<p class="subtitle">
						"Set a vertex count and click to place vertices, click two vertices to join them, then run an algorithm."
					</p>
				</div>
				<MstCanvas />
			</div>
		</ErrorBoundary>
	}
}
