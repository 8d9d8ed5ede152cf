//! Display configuration for the force-directed network widget.

use serde_json::{json, Value};

/// Options applied to the network widget and the loading indicator.
///
/// Defaults suit a dense social graph on a dark background: dot nodes with
/// large white labels, thick edges, and strong Barnes-Hut repulsion so the
/// clusters spread out.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    /// Document title shown in the browser tab
    pub title: String,
    /// Node shape ("dot", "ellipse", ...)
    pub node_shape: String,
    pub node_size: u32,
    pub font_size: u32,
    pub font_color: String,
    pub edge_width: u32,
    /// Barnes-Hut gravitational constant; more negative means stronger repulsion
    pub gravitational_constant: i64,
    /// Progress indicator advance per tick, in percent
    pub progress_step: u32,
    /// Progress indicator tick interval, in milliseconds
    pub progress_interval_ms: u32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            title: "Social Network".to_string(),
            node_shape: "dot".to_string(),
            node_size: 40,
            font_size: 22,
            font_color: "white".to_string(),
            edge_width: 5,
            gravitational_constant: -30_000,
            progress_step: 10,
            progress_interval_ms: 300,
        }
    }
}

impl WidgetOptions {
    /// The widget's options object in vis-network's schema.
    ///
    /// The progress fields are not part of this object; they feed the
    /// loading indicator script directly.
    pub fn to_widget_json(&self) -> Value {
        json!({
            "nodes": {
                "shape": self.node_shape,
                "size": self.node_size,
                "font": {
                    "size": self.font_size,
                    "color": self.font_color,
                },
            },
            "edges": {
                "width": self.edge_width,
            },
            "physics": {
                "barnesHut": {
                    "gravitationalConstant": self.gravitational_constant,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_tuning() {
        let options = WidgetOptions::default();
        assert_eq!(options.node_shape, "dot");
        assert_eq!(options.node_size, 40);
        assert_eq!(options.font_size, 22);
        assert_eq!(options.edge_width, 5);
        assert_eq!(options.gravitational_constant, -30_000);
        assert_eq!(options.progress_step, 10);
        assert_eq!(options.progress_interval_ms, 300);
    }

    #[test]
    fn widget_json_uses_vis_network_schema() {
        let value = WidgetOptions::default().to_widget_json();
        assert_eq!(value["nodes"]["shape"], "dot");
        assert_eq!(value["nodes"]["font"]["color"], "white");
        assert_eq!(value["edges"]["width"], 5);
        assert_eq!(
            value["physics"]["barnesHut"]["gravitationalConstant"],
            -30_000
        );
    }
}
