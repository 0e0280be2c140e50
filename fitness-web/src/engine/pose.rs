//! One frame of body landmarks from the pose estimator
//!
//! Landmark indices follow MediaPipe Pose (33 points). Positions are pixel
//! coordinates; a landmark the estimator did not see is `None`.

use nalgebra::Vector2;

use super::angles;
use crate::error::FrameError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat JS buffer: x, y, visibility
pub const VALUES_PER_LANDMARK: usize = 3;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 2D landmark in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoseFrame {
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self {
            landmarks: [None; LANDMARK_COUNT],
        }
    }
}

impl PoseFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by native pose sources
    pub fn with(mut self, index: usize, x: f32, y: f32) -> Self {
        self.set(index, Landmark::new(x, y));
        self
    }

    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = Some(landmark);
        }
    }

    /// Parse the flat buffer sent from JavaScript
    ///
    /// Layout: 33 × (x, y, visibility). An empty buffer means nobody is in
    /// frame and yields `Ok(None)`, as does a buffer where every landmark is
    /// below `min_visibility`.
    pub fn from_flat(data: &[f32], min_visibility: f32) -> Result<Option<Self>, FrameError> {
        let expected = LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.is_empty() {
            return Ok(None);
        }
        if data.len() != expected {
            return Err(FrameError::InvalidLength {
                got: data.len(),
                expected,
            });
        }

        let mut frame = Self::new();
        for (i, chunk) in data.chunks_exact(VALUES_PER_LANDMARK).enumerate() {
            let (x, y, visibility) = (chunk[0], chunk[1], chunk[2]);
            if visibility >= min_visibility && x.is_finite() && y.is_finite() {
                frame.landmarks[i] = Some(Landmark::new(x, y));
            }
        }

        if frame.is_empty() {
            Ok(None)
        } else {
            Ok(Some(frame))
        }
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }

    pub fn x(&self, index: usize) -> Option<f32> {
        self.get(index).map(|l| l.x)
    }

    pub fn y(&self, index: usize) -> Option<f32> {
        self.get(index).map(|l| l.y)
    }

    /// Interior angle at `vertex` between the rays to `a` and `c`
    pub fn angle(&self, a: usize, vertex: usize, c: usize) -> Option<f32> {
        Some(angles::joint_angle(
            self.get(a)?.position(),
            self.get(vertex)?.position(),
            self.get(c)?.position(),
        ))
    }

    /// Circular direction of `from -> to` in [0, 360)
    pub fn heading(&self, from: usize, to: usize) -> Option<f32> {
        Some(angles::heading(self.get(from)?.position(), self.get(to)?.position()))
    }

    pub fn distance(&self, a: usize, b: usize) -> Option<f32> {
        Some(angles::distance(self.get(a)?.position(), self.get(b)?.position()))
    }
}
