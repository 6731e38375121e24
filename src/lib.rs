//! Evaluator for the leaf/stem/fork tree calculus: an append-only node
//! arena, the `apply` rewriting rule, and codecs between trees, ternary
//! text, and derived values.

pub mod arena;
pub mod engine;
pub mod error;
pub mod ternary;
pub mod values;
