//! Reduction engine: `apply`, the single computation rule of the calculus.

pub mod apply;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::apply::apply;
pub use self::types::{set_apply_debug_override, set_apply_progress_ms_override};
