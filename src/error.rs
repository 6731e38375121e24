//! Failure model: representation defects vs caller-facing decode errors.

use crate::arena::TreeId;
use thiserror::Error;

/// A dangling identity observed during shape inspection.
///
/// The construction API only ever hands out identities below `size()`, so a
/// defect means the identity was forged or belongs to another arena. It is
/// not recoverable; the arena bookkeeping can no longer be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identity {id} out of bounds for arena of {size} nodes")]
pub struct Defect {
    pub id: TreeId,
    pub size: usize,
}

/// A shape mismatch while interpreting a tree as a derived value, or
/// malformed ternary text. Ordinary recoverable errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("tree at {0} is not a bool: found a fork")]
    NotABool(TreeId),
    #[error("tree at {0} is not a list: found a stem in spine position")]
    NotAList(TreeId),
    #[error("unexpected character {ch:?} at byte {at} of ternary encoding")]
    UnexpectedChar { ch: char, at: usize },
    #[error("ternary encoding is missing an operand for the shape at byte {at}")]
    MissingOperand { at: usize },
    #[error("ternary encoding decodes to {count} trees instead of one")]
    UnbalancedEncoding { count: usize },
    #[error("natural number at {0} does not fit in 64 bits")]
    NatOverflow(TreeId),
    #[error("value {value} at {id} is not a Unicode scalar")]
    BadCodePoint { id: TreeId, value: u64 },
}

/// Either failure class, tagged so callers can tell "can't happen" from
/// "bad input".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("representation defect: {0}")]
    Defect(#[from] Defect),
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

impl TreeError {
    pub fn is_defect(&self) -> bool {
        matches!(self, TreeError::Defect(_))
    }
}
