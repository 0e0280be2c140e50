//! Hold timer with break tolerance (planks, stretches)
//!
//! Accumulates time while a position predicate holds. What happens when the
//! predicate fails depends on the policy:
//! - `Reset`: the hold is lost immediately and the clock returns to zero,
//!   unless the target time was already reached.
//! - `Tolerate`: the clock keeps running through short breaks and only
//!   freezes after `max_breaks` consecutive bad frames. A later good frame
//!   resumes from the frozen value.
//!
//! Timestamps are supplied by the caller in seconds from any monotonic clock.

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BreakPolicy {
    Reset { keep_after_secs: f64 },
    Tolerate { max_breaks: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Not holding and not running
    Idle,
    /// A new hold segment began this frame
    Started,
    Holding,
    /// Bad frame absorbed by the tolerance budget
    Tolerated,
    /// Tolerance exhausted; elapsed time is frozen
    Stopped,
    /// Hold lost; elapsed time back to zero
    Reset,
}

pub struct HoldTimer {
    policy: BreakPolicy,
    /// Time banked from earlier segments
    accumulated: f64,
    segment_start: Option<f64>,
    elapsed: f64,
    form_breaks: u32,
}

impl HoldTimer {
    pub fn new(policy: BreakPolicy) -> Self {
        Self {
            policy,
            accumulated: 0.0,
            segment_start: None,
            elapsed: 0.0,
            form_breaks: 0,
        }
    }

    pub fn update(&mut self, in_position: bool, now: f64) -> TimerEvent {
        if in_position {
            self.form_breaks = 0;
            let event = match self.segment_start {
                Some(_) => TimerEvent::Holding,
                None => {
                    if let BreakPolicy::Reset { .. } = self.policy {
                        self.accumulated = 0.0;
                    }
                    self.segment_start = Some(now);
                    TimerEvent::Started
                }
            };
            if let Some(start) = self.segment_start {
                self.elapsed = self.accumulated + (now - start).max(0.0);
            }
            return event;
        }

        match self.policy {
            BreakPolicy::Tolerate { max_breaks } => {
                if self.segment_start.is_none() {
                    return TimerEvent::Idle;
                }
                self.form_breaks += 1;
                if self.form_breaks >= max_breaks {
                    self.accumulated = self.elapsed;
                    self.segment_start = None;
                    debug!("hold stopped after {} form breaks at {:.1}s", self.form_breaks, self.elapsed);
                    TimerEvent::Stopped
                } else {
                    TimerEvent::Tolerated
                }
            }
            BreakPolicy::Reset { keep_after_secs } => {
                let was_running = self.segment_start.take().is_some();
                if self.elapsed < keep_after_secs && self.elapsed > 0.0 {
                    self.elapsed = 0.0;
                    self.accumulated = 0.0;
                    TimerEvent::Reset
                } else if was_running {
                    TimerEvent::Stopped
                } else {
                    TimerEvent::Idle
                }
            }
        }
    }

    /// Seconds held, as of the last update
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.segment_start.is_some()
    }

    pub fn form_breaks(&self) -> u32 {
        self.form_breaks
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.segment_start = None;
        self.elapsed = 0.0;
        self.form_breaks = 0;
    }
}
