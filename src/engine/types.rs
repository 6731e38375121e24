//! Work-stack frames and diagnostics settings for the apply machine.

use crate::arena::TreeId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

static APPLY_PROGRESS_MS_OVERRIDE: AtomicU64 = AtomicU64::new(u64::MAX);
static APPLY_DEBUG_OVERRIDE: AtomicU64 = AtomicU64::new(u64::MAX);

/// Suspended work for the apply machine. The rule table's native recursion
/// becomes one of these on an explicit stack, so evaluation depth is bounded
/// by the heap rather than the call stack.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Frame {
    /// Distributor, first operand in flight: once `apply(u1, b)` is known,
    /// `apply(v, b)` still has to run.
    DistributeFirst { v: TreeId, b: TreeId },
    /// Distributor, second operand in flight: apply the saved first result
    /// to the incoming one.
    DistributeSecond { first: TreeId },
    /// Fork/fork split: apply the incoming result to the saved `b2`.
    SplitRight { b2: TreeId },
}

/// Cadence of `APPLY_PROGRESS` lines in milliseconds; 0 disables them.
pub(crate) fn apply_progress_ms() -> u64 {
    static MS: OnceLock<u64> = OnceLock::new();
    let over = APPLY_PROGRESS_MS_OVERRIDE.load(Ordering::Relaxed);
    if over != u64::MAX {
        return over;
    }
    *MS.get_or_init(|| {
        std::env::var("TERN_APPLY_PROGRESS_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(3000)
    })
}

/// Override the progress cadence without touching the environment; `None`
/// restores the `TERN_APPLY_PROGRESS_MS` setting.
pub fn set_apply_progress_ms_override(ms: Option<u64>) {
    APPLY_PROGRESS_MS_OVERRIDE.store(ms.unwrap_or(u64::MAX), Ordering::Relaxed);
}

pub(crate) fn apply_debug_level() -> u64 {
    static LEVEL: OnceLock<u64> = OnceLock::new();
    let over = APPLY_DEBUG_OVERRIDE.load(Ordering::Relaxed);
    if over != u64::MAX {
        return over;
    }
    *LEVEL.get_or_init(|| {
        std::env::var("TERN_APPLY_DEBUG")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0)
    })
}

/// Override the debug level; `None` restores `TERN_APPLY_DEBUG`.
pub fn set_apply_debug_override(level: Option<u64>) {
    APPLY_DEBUG_OVERRIDE.store(level.unwrap_or(u64::MAX), Ordering::Relaxed);
}
