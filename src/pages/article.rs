use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::config::GraphConfig;
use crate::fetch::fetch_graph;

/// Related-articles graph for the page being viewed. Renders nothing until
/// the graph document has loaded, and nothing at all if loading fails.
#[component]
pub fn ArticleGraph(config: GraphConfig, #[prop(into)] current_id: String) -> impl IntoView {
	let graph = RwSignal::new(None::<GraphData>);

	let url = config.data_url.clone();
	spawn_local(async move {
		match fetch_graph(&url).await {
			Ok(data) => {
				info!("graph: loaded {} nodes from {}", data.nodes.len(), url);
				graph.set(Some(data));
			}
			Err(e) => error!("graph: failed to load {}: {}", url, e),
		}
	});

	let GraphConfig {
		zoom,
		layout_iterations,
		..
	} = config;
	move || {
		graph.get().map(|data| {
			view! {
				<ForceGraphCanvas
					data=Signal::derive(move || data.clone())
					current_id=current_id.clone()
					zoom=zoom
					layout_iterations=layout_iterations
				/>
			}
		})
	}
}
