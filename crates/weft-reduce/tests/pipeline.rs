mod fixtures;

use fixtures::{
    pairs, plan_graph, plan_graph_chains_collapsed, plan_graph_pass_throughs_skipped,
    plan_graph_simplified, sorted,
};
use weft_core::VertexKey;
use weft_reduce::{
    collapse_chains, edge_list_hash, fold_branches, simplify, skip_pass_throughs, EliminationSet,
    Kernel,
};

fn key(raw: i64) -> VertexKey {
    VertexKey::from(raw)
}

#[test]
fn chain_collapse_reduces_a_line_to_a_single_edge() {
    let mut eliminated = EliminationSet::new();
    let line = pairs(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
    let collapsed = collapse_chains(line, &mut eliminated);
    assert_eq!(collapsed, pairs(&[(1, 5)]));
    let members: Vec<&VertexKey> = eliminated.iter().collect();
    assert_eq!(members, vec![&key(2), &key(3), &key(4)]);
}

#[test]
fn chain_collapse_folds_every_relay_chain() {
    let mut eliminated = EliminationSet::new();
    let collapsed = collapse_chains(plan_graph(), &mut eliminated);
    assert_eq!(sorted(collapsed), sorted(plan_graph_chains_collapsed()));
    assert_eq!(eliminated.len(), 17);
    assert!(eliminated.contains(&key(4)));
    assert!(!eliminated.contains(&key(8)));
    assert!(!eliminated.contains(&key(12)));
}

#[test]
fn pass_through_skip_drops_the_relay_into_a_join_point() {
    let mut eliminated = EliminationSet::new();
    let skipped = skip_pass_throughs(plan_graph_chains_collapsed(), &mut eliminated);
    assert_eq!(sorted(skipped), sorted(plan_graph_pass_throughs_skipped()));
    let members: Vec<&VertexKey> = eliminated.iter().collect();
    assert_eq!(members, vec![&key(8)]);
}

#[test]
fn branch_fold_merges_fan_outs_into_their_feeder() {
    let mut eliminated = EliminationSet::new();
    let folded = fold_branches(plan_graph_pass_throughs_skipped(), &mut eliminated);
    assert_eq!(sorted(folded), sorted(plan_graph_simplified()));
    let members: Vec<&VertexKey> = eliminated.iter().collect();
    assert_eq!(members, vec![&key(13), &key(14)]);
}

#[test]
fn the_full_pipeline_matches_the_staged_runs() {
    let outcome = simplify(&plan_graph());
    assert_eq!(sorted(outcome.edges.clone()), sorted(plan_graph_simplified()));

    let expected: Vec<VertexKey> = [
        4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 21, 22, 23, 24, 25, 26, 27, 28,
    ]
    .into_iter()
    .map(VertexKey::from)
    .collect();
    let members: Vec<VertexKey> = outcome.eliminated.iter().cloned().collect();
    assert_eq!(members, expected);
}

#[test]
fn reports_record_every_stage_in_order() {
    let outcome = simplify(&plan_graph());
    let report = &outcome.report;

    assert_eq!(report.initial_hash, edge_list_hash(&plan_graph()));
    assert_eq!(report.final_hash, edge_list_hash(&outcome.edges));
    assert_eq!(report.stages.len(), 3);

    let kernels: Vec<Kernel> = report.stages.iter().map(|entry| entry.stage).collect();
    assert_eq!(
        kernels,
        vec![Kernel::ChainCollapse, Kernel::PassThroughSkip, Kernel::BranchFold]
    );

    assert_eq!(report.stages[0].edges_before, 31);
    assert_eq!(report.stages[0].edges_after, 14);
    assert_eq!(report.stages[1].edges_after, 13);
    assert_eq!(report.stages[2].edges_after, 11);
    for window in report.stages.windows(2) {
        assert_eq!(window[0].edges_after, window[1].edges_before);
    }
    assert_eq!(report.stages[2].hash, report.final_hash);
}

#[test]
fn reports_serialize_as_json() {
    let outcome = simplify(&plan_graph());
    let json = serde_json::to_string(&outcome.report).unwrap();
    assert!(json.contains("ChainCollapse"));
    assert!(json.contains(&outcome.report.final_hash));
}

#[test]
fn simplification_is_idempotent_on_its_own_output() {
    let first = simplify(&plan_graph());
    let second = simplify(&first.edges);
    assert_eq!(second.edges, first.edges);
    assert!(second.eliminated.is_empty());
    assert_eq!(second.report.initial_hash, second.report.final_hash);
}

#[test]
fn hashes_ignore_list_order_but_not_direction() {
    let forward = pairs(&[(1, 2), (2, 3)]);
    let shuffled = pairs(&[(2, 3), (1, 2)]);
    let reversed = pairs(&[(2, 1), (2, 3)]);
    assert_eq!(edge_list_hash(&forward), edge_list_hash(&shuffled));
    assert_ne!(edge_list_hash(&forward), edge_list_hash(&reversed));
    assert_ne!(edge_list_hash(&forward), edge_list_hash(&pairs(&[(1, 2)])));
}
