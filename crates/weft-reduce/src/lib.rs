//! Topology-preserving simplification of directed edge lists.
//!
//! The engine works on plain `(tail, head)` key pairs. Three rewrite
//! kernels each run to a fixed point in a fixed order:
//!
//! 1. chain-collapse folds pure relay vertices into their predecessor,
//! 2. pass-through-skip hops over single-successor vertices that feed a
//!    join point, then drops the edges touching the skipped vertices,
//! 3. branch-fold merges a fan-out vertex into its single feeder.
//!
//! The surviving list has the same reachability skeleton as the input
//! over the keys that were not eliminated.

#![deny(missing_docs)]

pub mod adjacency;
pub mod edgelist;
pub mod generators;
pub mod hash;
pub mod kernel;
pub mod rewrite;

use serde::{Deserialize, Serialize};

pub use crate::edgelist::{
    from_graph, in_degree, next_one, next_set, out_degree, prev_one, prev_set, KeyPair,
};
pub use crate::hash::edge_list_hash;
pub use crate::kernel::{run_to_fixpoint, Kernel};
pub use crate::rewrite::{merge_left, skip_next, EliminationSet};

/// Record of a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageEntry {
    /// Kernel the stage ran.
    pub stage: Kernel,
    /// Edge count entering the stage.
    pub edges_before: usize,
    /// Edge count leaving the stage.
    pub edges_after: usize,
    /// Keys the stage eliminated.
    pub eliminated: EliminationSet,
    /// Canonical hash of the list leaving the stage.
    pub hash: String,
}

/// Summary of a full simplification run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimplifyReport {
    /// Canonical hash of the input list.
    pub initial_hash: String,
    /// Canonical hash of the surviving list.
    pub final_hash: String,
    /// Per-stage records in execution order.
    pub stages: Vec<StageEntry>,
}

/// Result of a full simplification run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimplifyOutcome {
    /// The surviving edge list.
    pub edges: Vec<KeyPair>,
    /// Union of the keys eliminated by every stage.
    pub eliminated: EliminationSet,
    /// Stage-by-stage run record.
    pub report: SimplifyReport,
}

/// Runs the chain-collapse kernel to a fixed point.
pub fn collapse_chains(edges: Vec<KeyPair>, eliminated: &mut EliminationSet) -> Vec<KeyPair> {
    run_to_fixpoint(Kernel::ChainCollapse, edges, eliminated)
}

/// Runs the pass-through-skip kernel, then drops every edge that still
/// touches a key this stage eliminated.
///
/// The kernel itself re-targets edges without changing the count, so the
/// trailing filter is what actually removes the skipped vertices.
pub fn skip_pass_throughs(edges: Vec<KeyPair>, eliminated: &mut EliminationSet) -> Vec<KeyPair> {
    let mut stage = EliminationSet::new();
    let rewritten = run_to_fixpoint(Kernel::PassThroughSkip, edges, &mut stage);
    let filtered = rewritten
        .into_iter()
        .filter(|(tail, head)| !stage.contains(tail) && !stage.contains(head))
        .collect();
    eliminated.absorb(&stage);
    filtered
}

/// Runs the branch-fold kernel to a fixed point.
pub fn fold_branches(edges: Vec<KeyPair>, eliminated: &mut EliminationSet) -> Vec<KeyPair> {
    run_to_fixpoint(Kernel::BranchFold, edges, eliminated)
}

/// Simplifies an edge list with the full three-stage pipeline.
///
/// Each stage starts from the previous stage's output with a fresh
/// elimination set; the outcome aggregates their union. The stage order is
/// part of the contract, reordering the kernels changes which vertices
/// survive.
pub fn simplify(edges: &[KeyPair]) -> SimplifyOutcome {
    let initial_hash = edge_list_hash(edges);
    let mut combined = EliminationSet::new();
    let mut stages = Vec::with_capacity(3);
    let mut current = edges.to_vec();

    for kernel in [Kernel::ChainCollapse, Kernel::PassThroughSkip, Kernel::BranchFold] {
        let edges_before = current.len();
        let mut stage_set = EliminationSet::new();
        current = match kernel {
            Kernel::ChainCollapse => collapse_chains(current, &mut stage_set),
            Kernel::PassThroughSkip => skip_pass_throughs(current, &mut stage_set),
            Kernel::BranchFold => fold_branches(current, &mut stage_set),
        };
        combined.absorb(&stage_set);
        stages.push(StageEntry {
            stage: kernel,
            edges_before,
            edges_after: current.len(),
            eliminated: stage_set,
            hash: edge_list_hash(&current),
        });
    }

    let final_hash = edge_list_hash(&current);
    SimplifyOutcome {
        edges: current,
        eliminated: combined,
        report: SimplifyReport {
            initial_hash,
            final_hash,
            stages,
        },
    }
}
