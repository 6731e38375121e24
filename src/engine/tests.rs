use crate::arena::{Arena, Node, TreeId};
use crate::engine::apply::apply;
use crate::engine::types::{set_apply_debug_override, set_apply_progress_ms_override};
use crate::error::TreeError;
use crate::ternary::{of_ternary, to_ternary};

#[test]
fn leaf_wraps_argument_in_a_stem() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    let b = g.fork(leaf, leaf);
    let res = apply(&mut g, leaf, b).unwrap();
    assert_eq!(g.node(res).unwrap(), Node::Stem(b));
}

#[test]
fn stem_pairs_child_with_argument() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    let u = g.stem(leaf);
    let a = g.stem(u);
    let b = g.fork(leaf, leaf);
    let res = apply(&mut g, a, b).unwrap();
    assert_eq!(g.node(res).unwrap(), Node::Fork(u, b));
}

#[test]
fn fork_with_leaf_head_returns_right_child_untouched() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    let v = g.stem(leaf);
    let a = g.fork(leaf, v);
    let b = g.fork(leaf, leaf);
    // The right child comes back by identity, not as a copy.
    let res = apply(&mut g, a, b).unwrap();
    assert_eq!(res, v);
}

#[test]
fn distributor_threads_argument_through_both_children() {
    let mut g = Arena::new();
    // apply(fork(stem(leaf), leaf), z) = apply(stem(z), stem(z)) = fork(z, stem(z))
    let a = of_ternary(&mut g, "2100").unwrap();
    let z = of_ternary(&mut g, "200").unwrap();
    let res = apply(&mut g, a, z).unwrap();
    assert_eq!(to_ternary(&g, res).unwrap(), "22001200");
    match g.node(res).unwrap() {
        Node::Fork(left, _) => assert_eq!(left, z),
        other => panic!("expected a fork, got {other:?}"),
    }
}

#[test]
fn branch_on_leaf_selects_first_grandchild() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    let u1 = g.stem(leaf);
    let v1 = g.fork(leaf, leaf);
    let u = g.fork(u1, v1);
    let a = g.fork(u, leaf);
    let res = apply(&mut g, a, leaf).unwrap();
    assert_eq!(res, u1);
}

#[test]
fn branch_on_stem_applies_second_grandchild() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    // v1 = leaf, so the branch reduces to apply(leaf, b1) = stem(b1).
    let u = g.fork(leaf, leaf);
    let a = g.fork(u, leaf);
    let b1 = g.fork(leaf, leaf);
    let b = g.stem(b1);
    let res = apply(&mut g, a, b).unwrap();
    assert_eq!(g.node(res).unwrap(), Node::Stem(b1));
}

#[test]
fn branch_on_fork_applies_right_child_to_both_halves() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    // v = leaf, so the branch reduces to apply(apply(leaf, b1), b2) = fork(b1, b2).
    let u = g.fork(leaf, leaf);
    let a = g.fork(u, leaf);
    let b1 = g.stem(leaf);
    let b2 = g.fork(leaf, leaf);
    let b = g.fork(b1, b2);
    let res = apply(&mut g, a, b).unwrap();
    assert_eq!(g.node(res).unwrap(), Node::Fork(b1, b2));
}

#[test]
fn deeply_nested_distributors_do_not_overflow_the_call_stack() {
    let mut g = Arena::new();
    // a_0 = leaf, a_n = fork(stem(a_n-1), leaf): every layer is a
    // distributor whose first operand is the next layer down, so the
    // machine's frame stack reaches the full nesting depth before the
    // first rewrite completes. Native recursion would blow the thread
    // stack at this depth.
    let mut a = g.leaf();
    for _ in 0..200_000 {
        let s = g.stem(a);
        a = g.fork(s, g.leaf());
    }
    let z = g.leaf();
    let res = apply(&mut g, a, z).unwrap();
    // Reduction alternates between stem(leaf) and fork(leaf, stem(leaf))
    // per layer; at even depth it lands on stem(leaf).
    assert_eq!(to_ternary(&g, res).unwrap(), "10");
}

#[test]
fn dangling_input_is_a_defect() {
    let mut g = Arena::new();
    let leaf = g.leaf();
    let bogus = TreeId(9_999);
    let err = apply(&mut g, bogus, leaf).unwrap_err();
    assert!(matches!(err, TreeError::Defect(_)));
    assert!(err.is_defect());
}

#[test]
fn diagnostic_overrides_do_not_affect_results() {
    set_apply_debug_override(Some(0));
    set_apply_progress_ms_override(Some(0));
    let mut g = Arena::new();
    let a = of_ternary(&mut g, "2110200").unwrap();
    let z = of_ternary(&mut g, "10").unwrap();
    let res = apply(&mut g, a, z).unwrap();
    assert_eq!(to_ternary(&g, res).unwrap(), "10");
    set_apply_debug_override(None);
    set_apply_progress_ms_override(None);
}
