//! Fixed-step clock
//!
//! Accumulates host time per registration and hands out whole periods.
//! Leftover time carries over to the next `advance`, so a slow frame
//! produces several ticks instead of dropping them.

use super::{TickDriver, TimerHandle};
use crate::error::{EffectError, EffectResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct TimerSlot {
    period: Duration,
    accumulated: Duration,
}

#[derive(Debug, Default)]
struct ClockState {
    next_id: u64,
    timers: HashMap<TimerHandle, TimerSlot>,
}

/// Process-wide fixed-step tick source
#[derive(Debug, Default)]
pub struct FixedStepClock {
    state: Mutex<ClockState>,
}

impl FixedStepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed host time to every active registration
    pub fn advance(&self, elapsed: Duration) {
        let mut state = self.state.lock();
        for slot in state.timers.values_mut() {
            slot.accumulated += elapsed;
        }
    }

    /// Number of live registrations
    pub fn active_timers(&self) -> usize {
        self.state.lock().timers.len()
    }

    pub fn is_registered(&self, handle: TimerHandle) -> bool {
        self.state.lock().timers.contains_key(&handle)
    }
}

impl TickDriver for FixedStepClock {
    fn register(&self, period: Duration) -> EffectResult<TimerHandle> {
        if period.is_zero() {
            return Err(EffectError::DriverRegistration {
                reason: "period must be non-zero".to_string(),
            });
        }

        let mut state = self.state.lock();
        let handle = TimerHandle(state.next_id);
        state.next_id += 1;
        state.timers.insert(
            handle,
            TimerSlot {
                period,
                accumulated: Duration::ZERO,
            },
        );

        log::debug!(
            "[FixedStepClock] Registered timer {} with period {:?}",
            handle.0,
            period
        );
        Ok(handle)
    }

    fn unregister(&self, handle: TimerHandle) {
        if self.state.lock().timers.remove(&handle).is_some() {
            log::debug!("[FixedStepClock] Unregistered timer {}", handle.0);
        }
    }

    fn take_due_ticks(&self, handle: TimerHandle) -> u32 {
        let mut state = self.state.lock();
        let Some(slot) = state.timers.get_mut(&handle) else {
            return 0;
        };

        let due = slot.accumulated.as_nanos() / slot.period.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        slot.accumulated -= slot.period * due;
        due
    }
}
