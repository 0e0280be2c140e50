//! Circular motion tracking (arm circles)
//!
//! Follows the heading of a limb frame to frame and counts a half
//! repetition on every reversal of rotation. Steps smaller than the dead
//! zone, or taken while the limb is not extended, are ignored.

use log::debug;
use serde::Serialize;

use super::angles::wrap_delta;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Forward,
    Backward,
}

pub struct CircleTracker {
    /// Minimum extension (px) for a frame to count as circling
    min_extension: f32,
    /// Heading changes at or below this (degrees) are jitter
    dead_zone: f32,
    prev_heading: f32,
    rotation: Option<Rotation>,
    half_turns: u32,
}

impl CircleTracker {
    pub fn new(min_extension: f32, dead_zone: f32) -> Self {
        Self {
            min_extension,
            dead_zone,
            prev_heading: 0.0,
            rotation: None,
            half_turns: 0,
        }
    }

    /// Update with this frame's heading (degrees, [0, 360)) and extension (px)
    ///
    /// Returns true when a reversal was counted.
    pub fn update(&mut self, heading: f32, extension: f32) -> bool {
        let mut reversed = false;

        if self.is_extended(extension) {
            let delta = wrap_delta(heading - self.prev_heading);
            if delta.abs() > self.dead_zone {
                let rotation = if delta > 0.0 {
                    Rotation::Forward
                } else {
                    Rotation::Backward
                };
                if matches!(self.rotation, Some(prev) if prev != rotation) {
                    self.half_turns += 1;
                    reversed = true;
                    debug!("rotation reversed to {:?}, count {}", rotation, self.count());
                }
                self.rotation = Some(rotation);
            }
        }

        self.prev_heading = heading;
        reversed
    }

    pub fn is_extended(&self, extension: f32) -> bool {
        extension > self.min_extension
    }

    /// Reversals counted, in steps of 0.5
    pub fn count(&self) -> f32 {
        self.half_turns as f32 / 2.0
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    pub fn min_extension(&self) -> f32 {
        self.min_extension
    }

    pub fn reset(&mut self) {
        self.prev_heading = 0.0;
        self.rotation = None;
        self.half_turns = 0;
    }
}
