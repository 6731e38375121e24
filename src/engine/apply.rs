//! The apply rewriting machine.

use crate::arena::{Arena, Node, TreeId};
use crate::engine::types::{apply_debug_level, apply_progress_ms, Frame};
use crate::error::TreeError;
use std::time::Instant;

const DEBUG_FORM_MAX_CHARS: usize = 96;

/// Apply `a` to `b`, the single computation rule of the calculus.
///
/// Case analysis on the shape of `a`, then (for a fork) on the shape of its
/// left child, then (for a fork-headed fork) on the shape of `b`:
///
/// - leaf            => stem(b)
/// - stem(u)         => fork(u, b)
/// - fork(leaf, v)   => v
/// - fork(stem(x), v) => apply(apply(x, b), apply(v, b))
/// - fork(fork(x, y), v), b leaf         => x
/// - fork(fork(x, y), v), b stem(b1)     => apply(y, b1)
/// - fork(fork(x, y), v), b fork(b1, b2) => apply(apply(v, b1), b2)
///
/// Inputs are never mutated; every rewrite allocates into the arena. The
/// calculus is Turing-complete, so this may run forever on nonterminating
/// programs - that is accepted, not an error. The only failure is a
/// representation defect in the inputs.
pub fn apply(g: &mut Arena, a: TreeId, b: TreeId) -> Result<TreeId, TreeError> {
    let progress_ms = apply_progress_ms();
    let debug = apply_debug_level();
    let start = Instant::now();
    let mut last_progress = start;
    if debug >= 1 {
        eprintln!(
            "APPLY_BEGIN a={a} b={b} form_a={} form_b={}",
            debug_form(g, a),
            debug_form(g, b)
        );
    }

    let mut stack: Vec<Frame> = Vec::new();
    let mut steps: u64 = 0;
    let mut task = (a, b);

    loop {
        // Reading the clock every rewrite would cost more than the rewrite;
        // amortize it over blocks of 64k steps.
        if progress_ms > 0
            && steps & 0xFFFF == 0
            && last_progress.elapsed().as_millis() >= u128::from(progress_ms)
        {
            eprintln!(
                "APPLY_PROGRESS elapsed_ms={} steps={steps} nodes={} depth={}",
                start.elapsed().as_millis(),
                g.size(),
                stack.len()
            );
            last_progress = Instant::now();
        }
        steps += 1;

        let (x, y) = task;
        let result = match g.node(x)? {
            Node::Leaf => {
                if debug >= 2 {
                    eprintln!("APPLY_RULE step={steps} rule=wrap arg={y}");
                }
                g.stem(y)
            }
            Node::Stem(u) => {
                if debug >= 2 {
                    eprintln!("APPLY_RULE step={steps} rule=graft child={u} arg={y}");
                }
                g.fork(u, y)
            }
            Node::Fork(u, v) => match g.node(u)? {
                Node::Leaf => {
                    if debug >= 2 {
                        eprintln!("APPLY_RULE step={steps} rule=select result={v}");
                    }
                    v
                }
                Node::Stem(u1) => {
                    if debug >= 2 {
                        eprintln!(
                            "APPLY_RULE step={steps} rule=distribute first={u1} second={v} arg={y}"
                        );
                    }
                    stack.push(Frame::DistributeFirst { v, b: y });
                    task = (u1, y);
                    continue;
                }
                Node::Fork(u1, v1) => match g.node(y)? {
                    Node::Leaf => {
                        if debug >= 2 {
                            eprintln!("APPLY_RULE step={steps} rule=branch_leaf result={u1}");
                        }
                        u1
                    }
                    Node::Stem(b1) => {
                        if debug >= 2 {
                            eprintln!(
                                "APPLY_RULE step={steps} rule=branch_stem target={v1} arg={b1}"
                            );
                        }
                        task = (v1, b1);
                        continue;
                    }
                    Node::Fork(b1, b2) => {
                        if debug >= 2 {
                            eprintln!(
                                "APPLY_RULE step={steps} rule=branch_fork target={v} args=[{b1},{b2}]"
                            );
                        }
                        stack.push(Frame::SplitRight { b2 });
                        task = (v, b1);
                        continue;
                    }
                },
            },
        };

        match stack.pop() {
            None => {
                if debug >= 1 {
                    eprintln!(
                        "APPLY_END steps={steps} nodes={} result={result} form={}",
                        g.size(),
                        debug_form(g, result)
                    );
                }
                return Ok(result);
            }
            Some(Frame::DistributeFirst { v, b }) => {
                stack.push(Frame::DistributeSecond { first: result });
                task = (v, b);
            }
            Some(Frame::DistributeSecond { first }) => task = (first, result),
            Some(Frame::SplitRight { b2 }) => task = (result, b2),
        }
    }
}

/// Budgeted ternary rendering for log lines. A log line must never fail and
/// never dominate the evaluation being observed, so defects render as `?`
/// and big terms truncate.
fn debug_form(g: &Arena, x: TreeId) -> String {
    let mut out = String::new();
    let mut stack = vec![x];
    while let Some(id) = stack.pop() {
        if out.len() >= DEBUG_FORM_MAX_CHARS {
            out.push_str("...");
            break;
        }
        match g.node(id) {
            Err(_) => out.push('?'),
            Ok(Node::Leaf) => out.push('0'),
            Ok(Node::Stem(u)) => {
                out.push('1');
                stack.push(u);
            }
            Ok(Node::Fork(u, v)) => {
                out.push('2');
                stack.push(v);
                stack.push(u);
            }
        }
    }
    out
}
