//! Tick Driver - periodic callback source for emitters
//!
//! An emitter never reaches for a global timer. The host creates a driver
//! once, shares it with every emitter it builds, and feeds it wall-clock
//! time. Emitters register a period on `start`, drop the registration on
//! `pause`, and pull the ticks that became due in between.

pub mod fixed_step_clock;

pub use fixed_step_clock::FixedStepClock;

use crate::error::EffectResult;
use std::sync::Arc;
use std::time::Duration;

/// Identifies one periodic registration on a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Periodic callback facility
pub trait TickDriver: Send + Sync {
    /// Register a callback firing once per `period`
    fn register(&self, period: Duration) -> EffectResult<TimerHandle>;

    /// Drop a registration. Unknown handles are ignored.
    fn unregister(&self, handle: TimerHandle);

    /// Number of whole periods elapsed for `handle` since the previous call.
    /// Unknown handles yield zero.
    fn take_due_ticks(&self, handle: TimerHandle) -> u32;
}

/// Driver shared between the host and its emitters
pub type SharedDriver = Arc<dyn TickDriver>;

/// Convert a millisecond period from configuration into a `Duration`
pub fn period_from_ms(period_ms: f32) -> Duration {
    let nanos = (f64::from(period_ms.max(0.0)) * 1_000_000.0).round();
    Duration::from_nanos(nanos as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_ms() {
        assert_eq!(period_from_ms(10.0), Duration::from_millis(10));
        assert_eq!(period_from_ms(16.5), Duration::from_micros(16_500));
        assert_eq!(period_from_ms(-5.0), Duration::ZERO);
    }
}
