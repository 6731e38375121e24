//! Value codec: booleans, lists, naturals and strings read off node shapes.
//!
//! Every decoder is shape inspection plus arena construction only; none of
//! them invokes `apply`. The encodings:
//!
//! - bool: leaf is false, stem(leaf) is true
//! - list: right-nested forks ending in a leaf; fork(head, tail) is cons
//! - nat: list of bools, least significant bit first
//! - string: list of nats, one Unicode code point each

use crate::arena::{Arena, Node, TreeId};
use crate::error::{DecodeError, TreeError};
use smallvec::SmallVec;

pub fn of_bool(g: &mut Arena, b: bool) -> TreeId {
    if b {
        let leaf = g.leaf();
        g.stem(leaf)
    } else {
        g.leaf()
    }
}

/// Leaf decodes to false and any stem to true; evaluator output does not
/// always canonicalize the stem's child. A fork is not a boolean.
pub fn to_bool(g: &Arena, x: TreeId) -> Result<bool, TreeError> {
    g.triage(
        || Ok(false),
        |_| Ok(true),
        |_, _| Err(DecodeError::NotABool(x).into()),
        x,
    )?
}

pub fn of_list(g: &mut Arena, items: &[TreeId]) -> TreeId {
    let mut tail = g.leaf();
    for &head in items.iter().rev() {
        tail = g.fork(head, tail);
    }
    tail
}

/// Walk the fork spine down to the terminating leaf. A stem anywhere in
/// spine position means the tree is not a list.
pub fn to_list(g: &Arena, x: TreeId) -> Result<Vec<TreeId>, TreeError> {
    let mut items = Vec::new();
    let mut spine = x;
    loop {
        match g.node(spine)? {
            Node::Leaf => return Ok(items),
            Node::Stem(_) => return Err(DecodeError::NotAList(spine).into()),
            Node::Fork(head, tail) => {
                items.push(head);
                spine = tail;
            }
        }
    }
}

/// Zero is the empty list; anything else is its bits, LSB first.
pub fn of_nat(g: &mut Arena, mut n: u64) -> TreeId {
    let mut bits: SmallVec<[TreeId; 64]> = SmallVec::new();
    while n != 0 {
        bits.push(of_bool(g, n & 1 == 1));
        n >>= 1;
    }
    of_list(g, &bits)
}

/// Fold the decoded list from its last element down to its first with
/// `acc = 2*acc + bit`; the bits are stored least significant first, so the
/// reverse walk rebuilds the value most significant bit leading.
pub fn to_nat(g: &Arena, x: TreeId) -> Result<u64, TreeError> {
    let bits = to_list(g, x)?;
    let mut acc: u64 = 0;
    for &bit in bits.iter().rev() {
        let b = to_bool(g, bit)?;
        acc = acc
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(u64::from(b)))
            .ok_or(DecodeError::NatOverflow(x))?;
    }
    Ok(acc)
}

pub fn of_string(g: &mut Arena, s: &str) -> TreeId {
    let chars: Vec<TreeId> = s
        .chars()
        .map(|c| of_nat(g, u64::from(u32::from(c))))
        .collect();
    of_list(g, &chars)
}

pub fn to_string(g: &Arena, x: TreeId) -> Result<String, TreeError> {
    let mut out = String::new();
    for id in to_list(g, x)? {
        let value = to_nat(g, id)?;
        let scalar = u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .ok_or(DecodeError::BadCodePoint { id, value })?;
        out.push(scalar);
    }
    Ok(out)
}
