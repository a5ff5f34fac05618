//! Tests for symbolic reachability using the example nets.
//!
//! Expected sets are shared with the explicit tests, so most of the tests here are
//! cross-checks between the two engines.


use crate::explicit::bfs_reachable;
use crate::net::{FiringRule, IncidenceMatrix, Marking, PetriNet};
use crate::symbolic::{
    ReachabilityConfig, SymbolicEncoding, SymbolicReachability, SymbolicReachabilityBfs,
    SymbolicSpace, bdd_reachable,
};
use crate::test_utils::example_nets::{
    branching, branching_net, cyclic, cyclic_net, fork, fork_net, source, source_net,
};
use crate::test_utils::{init_logger, mk_markings, symbolic_to_explicit};
use cancel_this::Cancellable;
use computation_process::Algorithm;
use num_bigint::BigInt;

fn all_example_nets() -> Vec<PetriNet> {
    vec![
        cyclic_net([1, 0, 0]),
        cyclic_net([1, 0, 1]),
        cyclic_net([1, 1, 1]),
        branching_net([1, 0, 0, 0, 0, 0, 0]),
        branching_net([1, 0, 0, 0, 0, 1, 0]),
        fork_net([1, 0, 0, 0, 0]),
        source_net(),
    ]
}

// ========== Scenario tests ==========

#[test]
fn test_cyclic_net_single_token() -> Cancellable<()> {
    init_logger();
    let net = cyclic_net([1, 0, 0]);
    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(3));
    assert_eq!(
        symbolic_to_explicit(&reachable),
        mk_markings(&net, cyclic::FROM_100)
    );
    Ok(())
}

#[test]
fn test_cyclic_net_fully_marked() -> Cancellable<()> {
    init_logger();
    let net = cyclic_net([1, 1, 1]);
    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(1));
    assert_eq!(
        symbolic_to_explicit(&reachable),
        mk_markings(&net, cyclic::FROM_111)
    );
    Ok(())
}

#[test]
fn test_branching_net() -> Cancellable<()> {
    init_logger();
    let net = branching_net([1, 0, 0, 0, 0, 0, 0]);
    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(8));
    assert!(reachable.contains(&Marking::from([1, 0, 0, 0, 0, 0, 0])));
    assert!(reachable.contains(&Marking::from([0, 0, 0, 0, 0, 0, 1])));
    assert_eq!(
        symbolic_to_explicit(&reachable),
        mk_markings(&net, branching::FROM_P1)
    );
    Ok(())
}

#[test]
fn test_fork_net() -> Cancellable<()> {
    init_logger();
    let net = fork_net([1, 0, 0, 0, 0]);
    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(6));
    assert_eq!(
        symbolic_to_explicit(&reachable),
        mk_markings(&net, fork::FROM_P1)
    );
    Ok(())
}

#[test]
fn test_source_transition() -> Cancellable<()> {
    init_logger();
    let net = source_net();
    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(4));
    assert_eq!(
        symbolic_to_explicit(&reachable),
        mk_markings(&net, source::FROM_EMPTY)
    );
    Ok(())
}

#[test]
fn test_transition_with_double_arc_never_fires() -> Cancellable<()> {
    init_logger();
    let net = PetriNet::from_matrices(
        &["p1", "p2"],
        &["t1"],
        IncidenceMatrix::from_rows(&[[2, 0]]).unwrap(),
        IncidenceMatrix::from_rows(&[[0, 1]]).unwrap(),
        [1, 0],
    )
    .unwrap();
    let encoding = SymbolicEncoding::new(&net);
    assert!(encoding.transition_relation(0).is_false());
    assert!(encoding.can_fire(0).is_empty());

    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(1));
    assert!(reachable.contains(net.initial_marking()));
    Ok(())
}

#[test]
fn test_huge_output_weight_never_fires() -> Cancellable<()> {
    init_logger();
    let document = r#"<pnml><net id="n"><page id="g">
        <place id="p"><initialMarking><text>1</text></initialMarking></place>
        <place id="q"/>
        <transition id="t"/>
        <arc id="a1" source="p" target="t"/>
        <arc id="a2" source="t" target="q"><inscription><text>4294967295</text></inscription></arc>
    </page></net></pnml>"#;
    let net = PetriNet::from_pnml_str(document).unwrap();
    assert_eq!(net.output().get(0, 1), u32::MAX);

    let encoding = SymbolicEncoding::new(&net);
    assert!(encoding.transition_relation(0).is_false());

    let (reachable, count) = bdd_reachable(&net)?;
    assert_eq!(count, BigInt::from(1));
    assert!(reachable.contains(net.initial_marking()));
    assert_eq!(bfs_reachable(&net)?.len(), 1);
    Ok(())
}

// ========== Consistency with explicit search ==========

#[test]
fn test_symbolic_matches_explicit() -> Cancellable<()> {
    init_logger();
    for net in all_example_nets() {
        let explicit = bfs_reachable(&net)?;
        let (symbolic, count) = bdd_reachable(&net)?;
        assert_eq!(symbolic_to_explicit(&symbolic), explicit);
        assert_eq!(count, BigInt::from(explicit.len()));
        assert!(symbolic.contains(net.initial_marking()));
    }
    Ok(())
}

#[test]
fn test_saturation_matches_bfs() -> Cancellable<()> {
    init_logger();
    for net in all_example_nets() {
        let encoding = SymbolicEncoding::new(&net);
        let saturation = SymbolicReachability::run(&encoding, encoding.mk_initial())?;
        let bfs = SymbolicReachabilityBfs::run(&encoding, encoding.mk_initial())?;
        assert_eq!(saturation, bfs);
    }
    Ok(())
}

#[test]
fn test_reachable_set_is_closed_under_firing() -> Cancellable<()> {
    init_logger();
    let net = fork_net([1, 0, 0, 0, 0]);
    let (reachable, _) = bdd_reachable(&net)?;
    for marking in reachable.markings() {
        for (_, successor) in net.successors(&marking, FiringRule::Safe) {
            assert!(reachable.contains(&successor));
        }
    }
    Ok(())
}

#[test]
fn test_symbolic_reachability_is_deterministic() -> Cancellable<()> {
    let net = branching_net([1, 0, 0, 0, 0, 1, 0]);
    let (a, a_count) = bdd_reachable(&net)?;
    let (b, b_count) = bdd_reachable(&net)?;
    assert_eq!(a, b);
    assert_eq!(a_count, b_count);
    assert_eq!(a.to_dnf_string(), b.to_dnf_string());
    Ok(())
}

// ========== Encoding ==========

#[test]
fn test_image_of_initial_marking() {
    let net = branching_net([1, 0, 0, 0, 0, 0, 0]);
    let encoding = SymbolicEncoding::new(&net);
    let post = encoding.post(&encoding.mk_initial());
    assert_eq!(
        symbolic_to_explicit(&post),
        mk_markings(&net, &[0b0100100])
    );
    assert!(encoding.post_out(&post).count() > BigInt::from(0));
    assert!(encoding.transition_post(1, &post).is_empty());
}

#[test]
fn test_next_state_names_avoid_collisions() {
    let places = vec!["a".to_string(), "a'".to_string()];
    let space = SymbolicSpace::new(&places);
    let vars = space.bdd_variables();
    assert_eq!(vars.name_of(space.current_variables()[0]), "a");
    assert_eq!(vars.name_of(space.next_variables()[0]), "a''");
    assert_eq!(vars.name_of(space.current_variables()[1]), "a'");
    assert_eq!(vars.name_of(space.next_variables()[1]), "a'''");
}

#[test]
fn test_unsafe_marking_is_not_representable() {
    let net = cyclic_net([1, 0, 0]);
    let encoding = SymbolicEncoding::new(&net);
    assert!(encoding.mk_marking(&Marking::from([2, 0, 0])).is_empty());
    assert!(!encoding.mk_unit().contains(&Marking::from([0, 2, 0])));
    assert_eq!(encoding.mk_unit().count(), BigInt::from(8));
}

#[test]
fn test_dnf_rendering() {
    let net = cyclic_net([1, 0, 0]);
    let encoding = SymbolicEncoding::new(&net);
    assert_eq!(encoding.mk_empty().to_dnf_string(), "false");
    assert_eq!(encoding.mk_unit().to_dnf_string(), "true");
    assert_eq!(
        encoding.mk_initial().to_dnf_string(),
        "(p1 & !p2 & !p3)"
    );

    let two = encoding.mk_markings(&[Marking::from([1, 0, 0]), Marking::from([0, 1, 0])]);
    let dnf = two.to_dnf_string();
    assert_eq!(dnf.matches(" | ").count(), 1);
    assert!(dnf.contains("!p3"));
}

#[test]
fn test_set_operations() {
    let net = cyclic_net([1, 0, 0]);
    let encoding = SymbolicEncoding::new(&net);
    let a = encoding.mk_markings(&[Marking::from([1, 0, 0]), Marking::from([0, 1, 0])]);
    let b = encoding.mk_markings(&[Marking::from([0, 1, 0]), Marking::from([0, 0, 1])]);
    assert_eq!(a.union(&b).count(), BigInt::from(3));
    assert_eq!(a.intersect(&b).count(), BigInt::from(1));
    assert_eq!(
        a.minus(&b).markings().collect::<Vec<_>>(),
        vec![Marking::from([1, 0, 0])]
    );
}

#[test]
fn test_markings_are_sorted() -> Cancellable<()> {
    let net = fork_net([1, 0, 0, 0, 0]);
    let (reachable, _) = bdd_reachable(&net)?;
    let markings: Vec<Marking> = reachable.markings().collect();
    let mut sorted = markings.clone();
    sorted.sort();
    assert_eq!(markings, sorted);
    Ok(())
}

// ========== Limits ==========

#[test]
fn test_iteration_limit_cancels_computation() {
    init_logger();
    let net = branching_net([1, 0, 0, 0, 0, 0, 0]);
    let mut config = ReachabilityConfig::from(&net);
    config.max_iterations = 2;
    let initial = config.encoding.mk_initial();
    assert!(SymbolicReachabilityBfs::run(config, initial).is_err());
}

#[test]
fn test_symbolic_size_limit_cancels_computation() {
    init_logger();
    let net = branching_net([1, 0, 0, 0, 0, 0, 0]);
    let mut config = ReachabilityConfig::from(&net);
    config.max_symbolic_size = 3;
    let initial = config.encoding.mk_initial();
    assert!(SymbolicReachability::run(config, initial).is_err());
}
