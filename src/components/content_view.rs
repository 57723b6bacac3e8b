use leptos::prelude::*;

use crate::rendering::blocks::RenderNode;

/// Renders the nodes of a structured content document.
///
/// Inline text may carry the authoring tool's markup, so the HTML comes
/// from [`RenderNode::to_html`], which sanitizes it.
#[component]
pub fn ContentView(nodes: Vec<RenderNode>) -> impl IntoView {
    view! {
        <div class="prose prose-lg max-w-none" inner_html=nodes_html(&nodes)></div>
    }
}

fn nodes_html(nodes: &[RenderNode]) -> String {
    nodes.iter().map(RenderNode::to_html).collect()
}
