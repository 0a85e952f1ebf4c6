//! Rewrite kernels and the fixed-point driver that schedules them.

use serde::{Deserialize, Serialize};
use weft_core::VertexKey;

use crate::edgelist::{in_degree, next_one, out_degree, prev_one, KeyPair};
use crate::rewrite::{merge_left, skip_next, EliminationSet};

/// The three local rewrites the simplifier knows how to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kernel {
    /// Collapses `i -> j -> ...` when `j` is a pure relay on a chain.
    ChainCollapse,
    /// Skips over a pass-through vertex whose successor is a join point.
    PassThroughSkip,
    /// Folds a fan-out vertex with a single feeder into that feeder.
    BranchFold,
}

impl Kernel {
    /// Stable name used in stage reports.
    pub fn name(self) -> &'static str {
        match self {
            Kernel::ChainCollapse => "chain-collapse",
            Kernel::PassThroughSkip => "pass-through-skip",
            Kernel::BranchFold => "branch-fold",
        }
    }

    /// Tries the kernel at the `(i, j)` site and returns the rewritten
    /// list, or the input unchanged when the guard does not hold.
    fn apply(
        self,
        i: &VertexKey,
        j: &VertexKey,
        edges: Vec<KeyPair>,
        eliminated: &mut EliminationSet,
    ) -> Vec<KeyPair> {
        match self {
            Kernel::ChainCollapse => {
                let relay = out_degree(i, &edges) == 1
                    && in_degree(j, &edges) == 1
                    && out_degree(j, &edges) >= 1;
                if relay {
                    eliminated.insert(j.clone());
                    return merge_left(i, j, &edges);
                }
                edges
            }
            Kernel::PassThroughSkip => {
                let pass_through = out_degree(i, &edges) == 1
                    && out_degree(j, &edges) == 1
                    && next_one(j, &edges)
                        .map(|successor| in_degree(successor, &edges) > 1)
                        .unwrap_or(false);
                if pass_through {
                    eliminated.insert(j.clone());
                    return skip_next(i, &edges);
                }
                edges
            }
            Kernel::BranchFold => {
                let fan_out = in_degree(i, &edges) == 1 && out_degree(i, &edges) > 1;
                if fan_out {
                    if let Some(feeder) = prev_one(i, &edges).cloned() {
                        eliminated.insert(i.clone());
                        return merge_left(&feeder, i, &edges);
                    }
                }
                edges
            }
        }
    }
}

/// Sweeps every `(i, j)` site in a snapshot of the current list, skipping
/// sites whose source was eliminated earlier in the run.
fn sweep(kernel: Kernel, edges: Vec<KeyPair>, eliminated: &mut EliminationSet) -> Vec<KeyPair> {
    let snapshot = edges.clone();
    let mut current = edges;
    for (i, j) in &snapshot {
        if eliminated.contains(i) {
            continue;
        }
        current = kernel.apply(i, j, current, eliminated);
    }
    current
}

/// Runs `kernel` to a fixed point of the edge count.
///
/// Each pass walks a snapshot of the list taken at the start of the pass
/// while the rewrites land on the evolving list. Passes repeat until one
/// leaves the edge count unchanged, then one more pass runs unconditionally
/// to catch sites a count-neutral rewrite exposed.
pub fn run_to_fixpoint(
    kernel: Kernel,
    edges: Vec<KeyPair>,
    eliminated: &mut EliminationSet,
) -> Vec<KeyPair> {
    let mut current = edges;
    loop {
        let count_before = current.len();
        current = sweep(kernel, current, eliminated);
        if current.len() == count_before {
            break;
        }
    }
    sweep(kernel, current, eliminated)
}
