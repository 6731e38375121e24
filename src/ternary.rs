//! Textual codec: the three-symbol prefix encoding of trees.
//!
//! `'0'` is a leaf, `'1'` a stem followed by its child, `'2'` a fork
//! followed by its left then right child. This flat ASCII string is the
//! system's only serialization format.

use crate::arena::{Arena, Node, TreeId};
use crate::error::{DecodeError, TreeError};
use smallvec::SmallVec;

/// Decode a ternary string into the arena.
///
/// Scans from the last character to the first, pushing a leaf for `'0'` and
/// popping one or two finished subtrees for `'1'`/`'2'`. Exactly one tree
/// must remain once the scan finishes.
pub fn of_ternary(g: &mut Arena, s: &str) -> Result<TreeId, TreeError> {
    let mut stack: SmallVec<[TreeId; 32]> = SmallVec::new();
    for (at, ch) in s.char_indices().rev() {
        match ch {
            '0' => stack.push(g.leaf()),
            '1' => {
                let u = stack.pop().ok_or(DecodeError::MissingOperand { at })?;
                stack.push(g.stem(u));
            }
            '2' => {
                let u = stack.pop().ok_or(DecodeError::MissingOperand { at })?;
                let v = stack.pop().ok_or(DecodeError::MissingOperand { at })?;
                stack.push(g.fork(u, v));
            }
            _ => return Err(DecodeError::UnexpectedChar { ch, at }.into()),
        }
    }
    if stack.len() != 1 {
        return Err(DecodeError::UnbalancedEncoding { count: stack.len() }.into());
    }
    Ok(stack[0])
}

/// Encode a tree as a ternary string, pre-order, left child first.
/// Structural inverse of [`of_ternary`].
pub fn to_ternary(g: &Arena, x: TreeId) -> Result<String, TreeError> {
    let mut out = String::new();
    let mut stack: SmallVec<[TreeId; 32]> = SmallVec::new();
    stack.push(x);
    while let Some(id) = stack.pop() {
        match g.node(id)? {
            Node::Leaf => out.push('0'),
            Node::Stem(u) => {
                out.push('1');
                stack.push(u);
            }
            Node::Fork(u, v) => {
                out.push('2');
                stack.push(v);
                stack.push(u);
            }
        }
    }
    Ok(out)
}
