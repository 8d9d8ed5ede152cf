//! Graph-to-document rendering.
//!
//! Two composable pure steps: [`dataset_json`] serializes the graph into
//! the widget's dataset, [`render_network_html`] substitutes dataset and
//! options into the bundled template. Keeping them separate lets tests
//! cover the dataset without parsing markup.

use mosaic_graph::Graph;

use crate::options::WidgetOptions;

/// Bundled document shell; slots are filled by [`render_network_html`].
const TEMPLATE: &str = include_str!("../assets/network.html");

const TITLE_SLOT: &str = "__PAGE_TITLE__";
const DATA_SLOT: &str = "__GRAPH_DATA__";
const OPTIONS_SLOT: &str = "__WIDGET_OPTIONS__";
const PROGRESS_STEP_SLOT: &str = "__PROGRESS_STEP__";
const PROGRESS_INTERVAL_SLOT: &str = "__PROGRESS_INTERVAL_MS__";

/// Serialize a graph into the widget's dataset JSON:
/// `{"nodes": [...], "edges": [...]}` with all attributes preserved.
pub fn dataset_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string(graph)
}

/// Render a graph into a self-contained HTML document hosting the
/// force-directed widget.
///
/// The document instantiates the widget over the embedded dataset, shows a
/// spinner and a time-based progress indicator until the layout stabilizes,
/// and re-fits the view on window resize. Output is deterministic: the same
/// graph and options always produce the same bytes.
pub fn render_network_html(graph: &Graph, options: &WidgetOptions) -> serde_json::Result<String> {
    let dataset = dataset_json(graph)?;
    Ok(TEMPLATE
        .replace(TITLE_SLOT, &escape_html(&options.title))
        .replace(DATA_SLOT, &dataset)
        .replace(OPTIONS_SLOT, &options.to_widget_json().to_string())
        .replace(PROGRESS_STEP_SLOT, &options.progress_step.to_string())
        .replace(PROGRESS_INTERVAL_SLOT, &options.progress_interval_ms.to_string()))
}

/// Minimal escaping for text interpolated into markup (the title).
/// Dataset and options are JSON and go into script context untouched.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_graph::NodeId;

    const SAMPLE: &str =
        r#"{"nodes":[{"id":1,"label":"A"},{"id":2,"label":"B"}],"edges":[{"from":1,"to":2}]}"#;

    fn sample_graph() -> Graph {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn dataset_json_round_trips_counts_and_ids() {
        let graph = sample_graph();
        let json = dataset_json(&graph).unwrap();

        let parsed: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.node_count(), graph.node_count());
        assert_eq!(parsed.edge_count(), graph.edge_count());
        assert_eq!(parsed.nodes[0].id, NodeId::Int(1));
        assert_eq!(parsed.nodes[1].id, NodeId::Int(2));
        assert_eq!(parsed.edges[0].from, NodeId::Int(1));
        assert_eq!(parsed.edges[0].to, NodeId::Int(2));
    }

    #[test]
    fn document_embeds_the_dataset() {
        let graph = sample_graph();
        let html = render_network_html(&graph, &WidgetOptions::default()).unwrap();
        let dataset = dataset_json(&graph).unwrap();

        assert!(html.contains(&format!("const data = {dataset};")));
    }

    #[test]
    fn document_fills_every_slot() {
        let html = render_network_html(&sample_graph(), &WidgetOptions::default()).unwrap();

        for slot in [
            TITLE_SLOT,
            DATA_SLOT,
            OPTIONS_SLOT,
            PROGRESS_STEP_SLOT,
            PROGRESS_INTERVAL_SLOT,
        ] {
            assert!(!html.contains(slot), "unfilled slot {slot}");
        }

        assert!(html.contains("<title>Social Network</title>"));
        assert!(html.contains(r#""gravitationalConstant":-30000"#));
        assert!(html.contains("}, 300);"));
        assert!(html.contains("progress += 10;"));
    }

    #[test]
    fn document_wires_widget_behavior() {
        let html = render_network_html(&sample_graph(), &WidgetOptions::default()).unwrap();

        assert!(html.contains("new vis.Network(container, data, options)"));
        assert!(html.contains("stabilizationIterationsDone"));
        assert!(html.contains("network.fit()"));
        assert!(html.contains("vis-network.min.js"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let graph = sample_graph();
        let options = WidgetOptions::default();
        let first = render_network_html(&graph, &options).unwrap();
        let second = render_network_html(&graph, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn title_is_escaped_for_markup() {
        let mut options = WidgetOptions::default();
        options.title = "Friends <& Followers>".to_string();
        let html = render_network_html(&sample_graph(), &options).unwrap();

        assert!(html.contains("<title>Friends &lt;&amp; Followers&gt;</title>"));
    }

    #[test]
    fn empty_graph_renders_empty_dataset() {
        let graph: Graph = serde_json::from_str(r#"{"nodes":[],"edges":[]}"#).unwrap();
        let html = render_network_html(&graph, &WidgetOptions::default()).unwrap();
        assert!(html.contains(r#"const data = {"nodes":[],"edges":[]};"#));
    }
}
