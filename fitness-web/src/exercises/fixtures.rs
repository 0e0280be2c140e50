//! Pose builders for exercise tests

use crate::engine::{PoseFrame, LANDMARK_COUNT};

/// Place `c` at `len` px from `vertex` so that the angle a-vertex-c is
/// `angle` degrees. `a` and `vertex` must already be placed.
pub fn bend(pose: PoseFrame, a: usize, vertex: usize, c: usize, angle: f32, len: f32) -> PoseFrame {
    let v = pose.get(vertex).expect("vertex placed");
    let base = pose.heading(vertex, a).expect("ray placed");
    let dir = (base + angle).to_radians();
    pose.with(c, v.x + len * dir.cos(), v.y + len * dir.sin())
}

/// Same as `bend`, turning the other way
pub fn bend_back(pose: PoseFrame, a: usize, vertex: usize, c: usize, angle: f32, len: f32) -> PoseFrame {
    let v = pose.get(vertex).expect("vertex placed");
    let base = pose.heading(vertex, a).expect("ray placed");
    let dir = (base - angle).to_radians();
    pose.with(c, v.x + len * dir.cos(), v.y + len * dir.sin())
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.05
}

/// Copy of `pose` with one landmark missing
pub fn without(pose: &PoseFrame, index: usize) -> PoseFrame {
    let mut out = PoseFrame::new();
    for i in (0..LANDMARK_COUNT).filter(|&i| i != index) {
        if let Some(l) = pose.get(i) {
            out.set(i, l);
        }
    }
    out
}
