//! Graph data model and cached loader for social-network datasets.
//!
//! A dataset is a JSON document in the network widget's wire convention:
//! a top-level object with a `"nodes"` array and an `"edges"` array. This
//! crate parses such documents into a typed [`Graph`] and memoizes the
//! result in a process-wide cache so repeated loads within a session skip
//! the read and the parse.
//!
//! # Usage
//!
//! ```no_run
//! let graph = mosaic_graph::load_graph("network_data.json").unwrap();
//! println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::{LoadError, Result};
pub use loader::{load_graph, read_graph};
pub use model::{DanglingEdge, Edge, Graph, Node, NodeId};
