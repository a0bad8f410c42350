//! Rename plan builder.
//!
//! Turns the positional (original, edited) pairs into an ordered list of renames
//! that can be executed top to bottom without clobbering a path whose content has
//! not been moved yet:
//! - cycles are rotated through a temp sibling of their first node, walking
//!   backwards so each node is vacated before its predecessor moves in
//! - open chains (a -> b while b -> c) are emitted tail-first
//! - everything else keeps request order

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::cycles::detect_cycles;
use super::op::RenameOp;
use super::temp::temp_sibling;
use super::validate::strip_cur_dir;

/// Build the executable plan. Input must already have passed `validate_edits`.
pub fn build_plan(original: &[PathBuf], edited: &[PathBuf]) -> Vec<RenameOp> {
    // `./b` and `b` must be the same graph node.
    let original: Vec<PathBuf> = original
        .iter()
        .map(|p| strip_cur_dir(p).to_path_buf())
        .collect();
    let edited: Vec<PathBuf> = edited
        .iter()
        .map(|p| strip_cur_dir(p).to_path_buf())
        .collect();

    let initial: Vec<RenameOp> = original
        .iter()
        .zip(&edited)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| RenameOp::new(from.clone(), to.clone()))
        .collect();

    if initial.is_empty() {
        debug!("No names changed");
        return initial;
    }

    let destinations: HashMap<&Path, &Path> = initial
        .iter()
        .map(|op| (op.from.as_path(), op.to.as_path()))
        .collect();

    let cycles = detect_cycles(&initial);

    let mut taken: HashSet<PathBuf> = original.iter().chain(&edited).cloned().collect();
    let mut handled: HashSet<&Path> = HashSet::new();
    let mut plan = Vec::with_capacity(initial.len() + cycles.len());

    for cycle in &cycles {
        let Some((first, rest)) = cycle.split_first() else {
            continue;
        };
        let Some(&first_dest) = destinations.get(first.as_path()) else {
            continue;
        };

        let temp = temp_sibling(first, &taken);
        taken.insert(temp.clone());
        debug!(first = %first.display(), temp = %temp.display(), len = cycle.len(), "Breaking cycle");

        // n0 -> temp, n(k-1) -> n0, ..., n1 -> n2, temp -> n1
        plan.push(RenameOp::new(first.clone(), temp.clone()));
        for node in rest.iter().rev() {
            if let Some(&dest) = destinations.get(node.as_path()) {
                plan.push(RenameOp::new(node.clone(), dest));
            }
        }
        plan.push(RenameOp::new(temp, first_dest));

        handled.extend(cycle.iter().map(PathBuf::as_path));
    }

    plan.extend(order_chains(&initial, &handled));

    info!(
        renames = initial.len(),
        cycles = cycles.len(),
        ops = plan.len(),
        temp_ops = plan.iter().filter(|op| op.touches_temp()).count(),
        "Rename plan built"
    );
    plan
}

/// Emit the ops not consumed by a cycle, each chain tail-first.
///
/// Starting from every op in request order, follow `to` while it is itself a
/// pending source, then emit the collected links in reverse. A target is thereby
/// always vacated before something is renamed onto it.
fn order_chains(ops: &[RenameOp], handled: &HashSet<&Path>) -> Vec<RenameOp> {
    let pending: HashMap<&Path, &RenameOp> = ops
        .iter()
        .filter(|op| !handled.contains(op.from.as_path()))
        .map(|op| (op.from.as_path(), op))
        .collect();

    let mut emitted: HashSet<&Path> = HashSet::with_capacity(pending.len());
    let mut ordered = Vec::with_capacity(pending.len());

    for op in ops {
        let from = op.from.as_path();
        if handled.contains(from) || emitted.contains(from) {
            continue;
        }

        let mut chain = vec![op];
        let mut in_chain: HashSet<&Path> = HashSet::from([from]);
        let mut cursor = op.to.as_path();
        while let Some(&next) = pending.get(cursor) {
            let next_from = next.from.as_path();
            if emitted.contains(next_from) || !in_chain.insert(next_from) {
                break;
            }
            chain.push(next);
            cursor = next.to.as_path();
        }

        if chain.len() > 1 {
            debug!(head = %from.display(), len = chain.len(), "Ordering chain tail-first");
        }
        for link in chain.into_iter().rev() {
            emitted.insert(link.from.as_path());
            ordered.push(link.clone());
        }
    }

    ordered
}
