//! Engine module - geometry, progress mapping and the counting state machines
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod circular;
mod form;
mod hold_timer;
mod pose;
mod progress;
mod repetition;
mod state;

pub use angles::{distance, heading, joint_angle, wrap_delta};
pub use circular::{CircleTracker, Rotation};
pub use form::{FormMode, FormValidator};
pub use hold_timer::{BreakPolicy, HoldTimer, TimerEvent};
pub use pose::{
    Landmark, PoseFrame,
    // Constants
    LANDMARK_COUNT, VALUES_PER_LANDMARK,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};
pub use progress::{map_linear, Calibration, Progress};
pub use repetition::{Extreme, Observation, PercentGate, RepRules, RepetitionStateMachine, Transition};
pub use state::{Direction, ExerciseSession};
