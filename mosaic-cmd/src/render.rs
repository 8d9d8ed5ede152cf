//! Document rendering command.

use anyhow::Context;
use log::info;
use mosaic_graph::load_graph;
use mosaic_render::{render_network_html, WidgetOptions};

/// Render the graph dataset at `input` into a self-contained HTML document
/// at `output`.
///
/// Loading goes through the process-wide cache, so repeated renders of the
/// same dataset within one invocation parse it once. The written document
/// is what the host dashboard embeds (fixed height, scrolling enabled on
/// its side).
pub fn run_render(input: &str, output: &str, title: Option<&str>) -> anyhow::Result<()> {
    let graph = load_graph(input)?;
    info!(
        "rendering {}: {} nodes, {} edges",
        input,
        graph.node_count(),
        graph.edge_count()
    );

    let mut options = WidgetOptions::default();
    if let Some(title) = title {
        options.title = title.to_string();
    }

    let html = render_network_html(&graph, &options)?;
    std::fs::write(output, &html)
        .with_context(|| format!("failed to write document to {output}"))?;

    info!("wrote {} bytes to {}", html.len(), output);
    Ok(())
}
