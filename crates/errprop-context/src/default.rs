//! The process-wide default strategy slot.
//!
//! The slot is a single `Mutex` holding a base strategy and a stack of
//! active overrides; reads and writes never hold the lock across user
//! code. Each [`StrategyOverride`] removes its own stack entry in `Drop`,
//! so the restore also runs on early `?` returns and during panic
//! unwinding, and guards may be dropped in any order. Overrides are
//! process-wide, not per-thread: the most recent live override from any
//! thread is the default.

use std::sync::{Mutex, MutexGuard, PoisonError};

use errprop_core::{PropagationError, PropagationStrategy, UncertainValue};
use tracing::{debug, warn};

struct Slot {
    base: PropagationStrategy,
    overrides: Vec<(u64, PropagationStrategy)>,
    next_id: u64,
}

impl Slot {
    fn current(&self) -> PropagationStrategy {
        self.overrides.last().map_or(self.base, |&(_, s)| s)
    }

    fn current_mut(&mut self) -> &mut PropagationStrategy {
        match self.overrides.last_mut() {
            Some((_, s)) => s,
            None => &mut self.base,
        }
    }
}

static DEFAULT: Mutex<Slot> = Mutex::new(Slot {
    base: PropagationStrategy::Statistical,
    overrides: Vec::new(),
    next_id: 0,
});

fn slot() -> MutexGuard<'static, Slot> {
    DEFAULT.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!("default strategy lock poisoned; recovering last value");
        poisoned.into_inner()
    })
}

/// The current default strategy. `Statistical` until changed.
pub fn default_strategy() -> PropagationStrategy {
    slot().current()
}

/// Replace the default strategy, returning the previous one.
///
/// While an override is active this replaces the overridden value, and
/// the change ends with that override.
pub fn set_default_strategy(strategy: PropagationStrategy) -> PropagationStrategy {
    let previous = std::mem::replace(slot().current_mut(), strategy);
    debug!(%previous, current = %strategy, "default strategy set");
    previous
}

/// Guard returned by [`override_default`].
///
/// Dropping it withdraws its override; the default becomes the most
/// recent override still alive, or the base value if none is.
#[must_use = "the override is reverted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct StrategyOverride {
    id: u64,
    previous: PropagationStrategy,
}

impl StrategyOverride {
    /// The default that was active when this override was created.
    pub fn previous(&self) -> PropagationStrategy {
        self.previous
    }
}

impl Drop for StrategyOverride {
    fn drop(&mut self) {
        let mut slot = slot();
        if let Some(pos) = slot.overrides.iter().position(|&(id, _)| id == self.id) {
            let (_, replaced) = slot.overrides.remove(pos);
            debug!(restored = %slot.current(), replaced = %replaced, "default strategy override ended");
        }
    }
}

/// Make `strategy` the default until the returned guard is dropped.
pub fn override_default(strategy: PropagationStrategy) -> StrategyOverride {
    let mut slot = slot();
    let previous = slot.current();
    let id = slot.next_id;
    slot.next_id += 1;
    slot.overrides.push((id, strategy));
    debug!(%previous, current = %strategy, "default strategy overridden");
    StrategyOverride { id, previous }
}

/// Run `f` with `strategy` as the default.
pub fn with_strategy<T>(strategy: PropagationStrategy, f: impl FnOnce() -> T) -> T {
    let _guard = override_default(strategy);
    f()
}

/// `value ± absolute` under the current default strategy.
pub fn measured(value: f64, absolute: f64) -> Result<UncertainValue, PropagationError> {
    UncertainValue::from_absolute(value, absolute, default_strategy())
}

/// `value` with a fractional tolerance (`0.01` is 1%) under the current
/// default strategy.
pub fn toleranced(value: f64, relative: f64) -> Result<UncertainValue, PropagationError> {
    UncertainValue::from_relative(value, Some(relative), default_strategy())
}
