//! Cycle detection over the rename graph.
//!
//! Every source has at most one destination, so a depth-first search degenerates
//! into a walk along a single chain. The walk keeps the current path in a Vec and
//! the per-node state in a map owned by the call.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::trace;

use super::op::RenameOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Find every cycle in `ops`, each as its node list in walk order.
///
/// A cycle starts at the node where the walk closed it, so for `a -> b -> a`
/// starting from `a` the result is `[a, b]`.
pub fn detect_cycles(ops: &[RenameOp]) -> Vec<Vec<PathBuf>> {
    let graph: HashMap<&Path, &Path> = ops
        .iter()
        .map(|op| (op.from.as_path(), op.to.as_path()))
        .collect();
    let mut state: HashMap<&Path, Visit> = HashMap::with_capacity(graph.len());
    let mut cycles = Vec::new();

    for op in ops {
        if state.contains_key(op.from.as_path()) {
            continue;
        }
        if let Some(cycle) = walk(op.from.as_path(), &graph, &mut state) {
            trace!(len = cycle.len(), "Cycle found");
            cycles.push(cycle);
        }
    }

    cycles
}

fn walk<'a>(
    start: &'a Path,
    graph: &HashMap<&'a Path, &'a Path>,
    state: &mut HashMap<&'a Path, Visit>,
) -> Option<Vec<PathBuf>> {
    let mut path: Vec<&'a Path> = Vec::new();
    let mut node = start;

    let found = loop {
        state.insert(node, Visit::InProgress);
        path.push(node);

        let Some(&next) = graph.get(node) else {
            break None;
        };
        match state.get(next) {
            Some(Visit::InProgress) => {
                break path
                    .iter()
                    .position(|n| *n == next)
                    .map(|i| path[i..].iter().map(|p| p.to_path_buf()).collect());
            }
            Some(Visit::Done) => break None,
            None => node = next,
        }
    };

    for n in path {
        state.insert(n, Visit::Done);
    }
    found
}
