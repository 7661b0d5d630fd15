//! Countdown handle driving the one-second session timer.
//!
//! The handle is a logical timer: the caller feeds elapsed wall time in with
//! [`Countdown::advance`] and pulls due ticks out with [`Countdown::take_due`].
//! Scheduling always replaces the previous schedule, so two countdowns can
//! never drive the same session.

/// Cancellable repeating timer
#[derive(Debug, Clone)]
pub struct Countdown {
    interval_ms: u32,
    elapsed_ms: u32,
    active: bool,
    /// Bumped on every `schedule`; identifies the live schedule.
    generation: u32,
}

impl Countdown {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            active: false,
            generation: 0,
        }
    }

    /// Arm the timer, cancelling any schedule that was still active.
    ///
    /// Returns the generation of the new schedule.
    pub fn schedule(&mut self) -> u32 {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Disarm the timer. Cancelling an inactive timer is a no-op.
    ///
    /// Returns whether a schedule was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.elapsed_ms = 0;
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Accumulate elapsed time. Ignored while inactive.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.active {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    /// Consume one due interval, if any.
    pub fn take_due(&mut self) -> bool {
        if self.active && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick is due, or `None` while inactive.
    pub fn until_next_ms(&self) -> Option<u32> {
        self.active
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }
}
