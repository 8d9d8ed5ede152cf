//! Self-contained HTML document rendering for social network graphs.
//!
//! This crate provides:
//! - `options`: display configuration for the force-directed widget
//! - `render`: dataset serialization and template substitution
//!
//! Rendering is pure: a [`Graph`](mosaic_graph::Graph) plus a
//! [`WidgetOptions`] deterministically produce one document string. The
//! document carries everything the browser needs besides the widget's CDN
//! bundle.

pub mod options;
pub mod render;

pub use options::WidgetOptions;
pub use render::{dataset_json, render_network_html};
