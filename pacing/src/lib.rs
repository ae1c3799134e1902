//! Rate-limiting wrappers for high-frequency browser callbacks.
//!
//! Scroll, resize and pointer events fire far more often than the work they
//! trigger needs to run. This crate wraps an arbitrary callback so that its
//! invocation frequency is controlled, independent of where the trigger comes
//! from. Timers are reached through the [`scheduler::Scheduler`] seam, so the
//! same wrappers run against `setTimeout` in the browser and against a virtual
//! clock in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scheduler`] | `Scheduler` trait, `TimerId`, and the deterministic `ManualScheduler` |
//! | [`debounce`] | Trailing-edge debounce: fire once after a quiet period |
//! | [`throttle`] | Leading-edge throttle: fire, then drop calls for a cooldown |
//! | `timeout` | `TimeoutScheduler` over `gloo_timers` (feature `browser`) |
//!
//! Everything here is single-threaded. Wrapped functions hold `Rc` state and
//! are intentionally neither `Send` nor `Sync`.

pub mod debounce;
pub mod scheduler;
pub mod throttle;
#[cfg(feature = "browser")]
pub mod timeout;

pub use debounce::{Debounced, debounce};
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use throttle::{Throttled, throttle};
#[cfg(feature = "browser")]
pub use timeout::TimeoutScheduler;

/// Mutable state owned by one wrapped-function instance.
///
/// Debounce only uses `pending_timer`; throttle tracks its cooldown reset
/// timer in `pending_timer` and the window itself in `cooldown_active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WrapperState {
    pub pending_timer: Option<TimerId>,
    pub cooldown_active: bool,
}
