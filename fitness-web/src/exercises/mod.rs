//! Exercises module - per-exercise profiles, trackers and the session driver
//!
//! Re-exports only. All logic in submodules.

mod arm_circles;
mod bicep_curl;
mod chest_stretch;
mod jumping_jack;
mod kind;
mod lateral_raise;
mod lunge;
mod plank;
mod profile;
mod push_up;
mod report;
mod shoulder_press;
mod squat;
mod tricep_dip;
mod tricep_stretch;
mod workout;

#[cfg(test)]
mod fixtures;

pub use arm_circles::ArmCircles;
pub use chest_stretch::{ChestStretch, ChestStretchVariant};
pub use kind::ExerciseKind;
pub use plank::{milestone, Plank, PlankVariant};
pub use profile::{ExerciseProfile, Reading, RepCounter};
pub use report::{Detail, FrameReport, SessionSummary};
pub use tricep_stretch::TricepStretch;
pub use workout::{Tracker, Workout};
