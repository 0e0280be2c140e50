//! Landmark storage and JS bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript and holds the latest
//! frame until the next workout tick consumes it.

use log::warn;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::engine::PoseFrame;
use crate::error::FrameError;

/// Internal storage for the most recent frame
#[derive(Default)]
struct LandmarkStore {
    /// `None` after a tick, or when nobody was in view
    pose: Option<PoseFrame>,
    frames_received: u64,
    frames_rejected: u64,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × x, y, visibility), or an empty array when nobody is in view
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if let Err(e) = store_landmarks(data, super::session::min_visibility()) {
        warn!("landmark frame dropped: {}", e);
    }
}

/// Forget any frame not yet consumed
#[wasm_bindgen]
pub fn clear_landmarks() {
    LANDMARKS.with(|store_cell| store_cell.borrow_mut().pose = None);
}

/// Frames received and frames rejected since load
#[wasm_bindgen]
pub fn landmark_stats() -> Vec<f64> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        vec![store.frames_received as f64, store.frames_rejected as f64]
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Parse and store one frame; a rejected frame leaves nothing to process
pub(crate) fn store_landmarks(data: &[f32], min_visibility: f32) -> Result<(), FrameError> {
    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.frames_received += 1;
        match PoseFrame::from_flat(data, min_visibility) {
            Ok(pose) => {
                store.pose = pose;
                Ok(())
            }
            Err(e) => {
                store.pose = None;
                store.frames_rejected += 1;
                Err(e)
            }
        }
    })
}

/// Take the pending frame, leaving the store empty
pub(crate) fn take_pose() -> Option<PoseFrame> {
    LANDMARKS.with(|store_cell| store_cell.borrow_mut().pose.take())
}

/// Check if a frame is waiting to be processed
#[allow(dead_code)]
pub(crate) fn has_landmarks() -> bool {
    LANDMARKS.with(|store_cell| store_cell.borrow().pose.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LANDMARK_COUNT, VALUES_PER_LANDMARK};

    #[test]
    fn test_store_and_take() {
        let data = vec![0.5; LANDMARK_COUNT * VALUES_PER_LANDMARK];
        store_landmarks(&data, 0.5).unwrap();
        assert!(has_landmarks());
        assert!(take_pose().is_some());
        assert!(take_pose().is_none());
    }

    #[test]
    fn test_bad_length_is_rejected() {
        store_landmarks(&vec![0.5; LANDMARK_COUNT * VALUES_PER_LANDMARK], 0.5).unwrap();
        let err = store_landmarks(&[1.0, 2.0, 3.0], 0.5).unwrap_err();
        assert_eq!(err, FrameError::InvalidLength { got: 3, expected: 99 });
        assert!(take_pose().is_none());
    }

    #[test]
    fn test_empty_means_nobody() {
        store_landmarks(&[], 0.5).unwrap();
        assert!(take_pose().is_none());
    }
}
