//! Repetition state machine
//!
//! Converts (form, progress percentage, guard predicates) into count,
//! direction and feedback. One half repetition is recorded each time the
//! movement reaches the extreme opposite to the one last recorded:
//!
//! ```text
//!   Down --(peak gate + guard)--> Up --(rest gate + guard)--> Down
//!          count += 0.5                  count += 0.5
//! ```
//!
//! Holding still at an extreme never counts twice because the stored
//! direction has already flipped.

use log::debug;

use super::state::{Direction, ExerciseSession};

/// Percentage condition for an extreme of the movement
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentGate {
    /// No percentage condition; the guard alone decides (positional exercises)
    Any,
    Above(f32),
    AtLeast(f32),
    Below(f32),
    AtMost(f32),
}

impl PercentGate {
    pub fn admits(&self, percent: f32) -> bool {
        match *self {
            PercentGate::Any => true,
            PercentGate::Above(t) => percent > t,
            PercentGate::AtLeast(t) => percent >= t,
            PercentGate::Below(t) => percent < t,
            PercentGate::AtMost(t) => percent <= t,
        }
    }

    fn bounds_band(&self) -> bool {
        !matches!(self, PercentGate::Any)
    }
}

/// One end of the movement and the cue shown when it is reached
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extreme {
    pub gate: PercentGate,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepRules {
    /// Reached first from the starting posture (bottom of a squat, top of a curl)
    pub peak: Extreme,
    /// The starting posture, reached again to finish the repetition
    pub rest: Extreme,
    /// Feedback while moving between the extremes
    pub in_progress: &'static str,
    /// Replaces `in_progress` above this percentage
    pub upper_band: Option<(f32, &'static str)>,
    /// Shown when a gate admits the percentage but its guard fails;
    /// without it the previous feedback stays up
    pub guard_failed: Option<&'static str>,
}

/// Per-frame input to the state machine
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Observation {
    pub percent: f32,
    pub peak_guard: bool,
    pub rest_guard: bool,
    /// Exercise-specific cue that overrides the in-progress message
    pub hint: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Half repetition recorded at the peak, direction is now Up
    Peak,
    /// Half repetition recorded back at rest, direction is now Down
    Rest,
}

pub struct RepetitionStateMachine {
    rules: RepRules,
    initial_feedback: &'static str,
    session: ExerciseSession,
}

impl RepetitionStateMachine {
    pub fn new(rules: RepRules, initial_feedback: &'static str) -> Self {
        Self {
            rules,
            initial_feedback,
            session: ExerciseSession::new(initial_feedback),
        }
    }

    pub fn session(&self) -> &ExerciseSession {
        &self.session
    }

    pub fn rules(&self) -> &RepRules {
        &self.rules
    }

    /// Apply one frame
    ///
    /// `form_ok` is the validator's verdict for this frame; `fix_message` is
    /// shown instead of any movement cue while it is false.
    pub fn advance(&mut self, form_ok: bool, fix_message: &'static str, obs: &Observation) -> Transition {
        self.session.form = form_ok;
        if !form_ok {
            self.session.feedback = fix_message;
            return Transition::None;
        }

        let at_peak = self.rules.peak.gate.admits(obs.percent);
        let at_rest = self.rules.rest.gate.admits(obs.percent);

        if at_peak && obs.peak_guard {
            self.session.feedback = self.rules.peak.message;
            if self.session.direction == Direction::Down {
                self.session.complete_half();
                debug!("peak reached at {:.1}%, count {}", obs.percent, self.session.count());
                return Transition::Peak;
            }
            return Transition::None;
        }

        if at_rest && obs.rest_guard {
            self.session.feedback = self.rules.rest.message;
            if self.session.direction == Direction::Up {
                self.session.complete_half();
                debug!("back at rest at {:.1}%, count {}", obs.percent, self.session.count());
                return Transition::Rest;
            }
            return Transition::None;
        }

        let outside_band = (at_peak && self.rules.peak.gate.bounds_band())
            || (at_rest && self.rules.rest.gate.bounds_band());
        if outside_band {
            if let Some(message) = self.rules.guard_failed {
                self.session.feedback = message;
            }
            return Transition::None;
        }

        self.session.feedback = match (obs.hint, self.rules.upper_band) {
            (Some(hint), _) => hint,
            (None, Some((threshold, message))) if obs.percent > threshold => message,
            _ => self.rules.in_progress,
        };
        Transition::None
    }

    pub fn reset(&mut self) {
        self.session = ExerciseSession::new(self.initial_feedback);
    }
}
