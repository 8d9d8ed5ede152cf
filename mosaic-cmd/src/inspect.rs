//! Dataset checking and statistics commands.

use anyhow::bail;
use log::{info, warn};
use mosaic_graph::load_graph;

/// Check that every edge in the dataset references existing node
/// identifiers.
///
/// Loading itself never enforces this (the widget tolerates dangling
/// references); this command surfaces the gap on demand and fails if any
/// endpoint is missing.
pub fn run_check(input: &str) -> anyhow::Result<()> {
    let graph = load_graph(input)?;
    let dangling = graph.validate_edges();

    if dangling.is_empty() {
        info!(
            "{}: {} edges, all endpoints resolve",
            input,
            graph.edge_count()
        );
        return Ok(());
    }

    for d in &dangling {
        warn!("edge {} references missing node {}", d.edge_index, d.endpoint);
    }
    bail!("{} dangling edge endpoint(s) in {}", dangling.len(), input);
}

/// Print node/edge counts and label coverage for the dataset.
pub fn run_stats(input: &str) -> anyhow::Result<()> {
    let graph = load_graph(input)?;
    let labeled = graph.nodes.iter().filter(|n| n.label.is_some()).count();

    println!("nodes:   {}", graph.node_count());
    println!("edges:   {}", graph.edge_count());
    println!("labeled: {}/{}", labeled, graph.node_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_clean_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("clean.json");
        std::fs::write(
            &input,
            r#"{"nodes":[{"id":1},{"id":2}],"edges":[{"from":1,"to":2}]}"#,
        )
        .unwrap();

        assert!(run_check(input.to_str().unwrap()).is_ok());
    }

    #[test]
    fn check_fails_on_dangling_edge() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dangling.json");
        std::fs::write(
            &input,
            r#"{"nodes":[{"id":1}],"edges":[{"from":1,"to":99}]}"#,
        )
        .unwrap();

        let err = run_check(input.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("1 dangling edge endpoint"));
    }

    #[test]
    fn stats_handles_unlabeled_nodes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("stats.json");
        std::fs::write(
            &input,
            r#"{"nodes":[{"id":1,"label":"A"},{"id":2}],"edges":[]}"#,
        )
        .unwrap();

        assert!(run_stats(input.to_str().unwrap()).is_ok());
    }
}
