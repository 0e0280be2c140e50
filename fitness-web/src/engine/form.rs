//! Form gating
//!
//! Each exercise evaluates its own start-posture predicate every frame; the
//! validator decides what that means for the session. A latching validator
//! stays established after the first valid frame, a per-frame validator
//! follows the predicate exactly.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// Established once, never revoked for the rest of the session
    Latching,
    /// Re-derived from the current frame only
    PerFrame,
}

#[derive(Clone, Debug)]
pub struct FormValidator {
    mode: FormMode,
    established: bool,
}

impl FormValidator {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            established: false,
        }
    }

    pub fn latching() -> Self {
        Self::new(FormMode::Latching)
    }

    pub fn per_frame() -> Self {
        Self::new(FormMode::PerFrame)
    }

    /// Feed this frame's predicate result, returns whether form is OK now
    pub fn observe(&mut self, valid: bool) -> bool {
        self.established = match self.mode {
            FormMode::Latching => self.established || valid,
            FormMode::PerFrame => valid,
        };
        self.established
    }

    pub fn is_established(&self) -> bool {
        self.established
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn reset(&mut self) {
        self.established = false;
    }
}
