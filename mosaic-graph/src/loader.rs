//! JSON dataset loading with process-wide memoization.
//!
//! [`read_graph`] is the plain read-and-parse step. [`load_graph`] wraps it
//! in a cache keyed by resource path: each entry stores a fingerprint of
//! the file (length + modification time), so a repeated load costs one
//! `stat` and no read while the file is unchanged. If the `stat` itself
//! fails after a successful load, the cached graph is served for the rest
//! of the session.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::SystemTime;

use log::{debug, info};

use crate::error::{LoadError, Result};
use crate::model::Graph;

/// Cheap change detector: one `stat`, no read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    len: u64,
    // Not every filesystem reports modification times
    modified: Option<SystemTime>,
}

struct CacheEntry {
    fingerprint: Fingerprint,
    graph: Arc<Graph>,
}

fn cache() -> &'static Mutex<HashMap<PathBuf, CacheEntry>> {
    static CACHE: OnceLock<Mutex<HashMap<PathBuf, CacheEntry>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn fingerprint(path: &Path) -> std::io::Result<Fingerprint> {
    let meta = fs::metadata(path)?;
    Ok(Fingerprint {
        len: meta.len(),
        modified: meta.modified().ok(),
    })
}

/// Read and parse a graph dataset, bypassing the cache.
///
/// Expected shape: `{"nodes": [{"id", "label"?, ...}, ...],
/// "edges": [{"from", "to", ...}, ...]}`. The data passes through
/// unmodified; unknown attributes are preserved.
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::ResourceNotFound { path: path.to_path_buf() }
        } else {
            LoadError::Io { path: path.to_path_buf(), source }
        }
    })?;

    let graph: Graph = serde_json::from_str(&text).map_err(|source| LoadError::MalformedData {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Load a graph dataset through the process-wide cache.
///
/// The first call for a path reads and parses the file; later calls return
/// the cached graph as long as the file's fingerprint is unchanged. A
/// rewritten file is picked up on the next call.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Arc<Graph>> {
    let path = path.as_ref();
    let current = fingerprint(path);

    {
        let map = cache().lock().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = map.get(path) {
            match current {
                Ok(fp) if fp == entry.fingerprint => {
                    debug!("cache hit for {}", path.display());
                    return Ok(Arc::clone(&entry.graph));
                }
                // Session-lifetime semantics: a vanished file does not
                // invalidate a graph we already hold.
                Err(_) => {
                    debug!("stat failed for {}, serving cached graph", path.display());
                    return Ok(Arc::clone(&entry.graph));
                }
                Ok(_) => {
                    debug!("fingerprint changed for {}, reloading", path.display());
                }
            }
        }
    }

    let graph = Arc::new(read_graph(path)?);

    if let Ok(fp) = current.or_else(|_| fingerprint(path)) {
        let mut map = cache().lock().unwrap_or_else(|e| e.into_inner());
        map.insert(
            path.to_path_buf(),
            CacheEntry { fingerprint: fp, graph: Arc::clone(&graph) },
        );
    }

    Ok(graph)
}
