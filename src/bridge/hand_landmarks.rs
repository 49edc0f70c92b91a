//! Hand landmark intake and the per-camera-session counter
//! 
//! JavaScript forwards every MediaPipe Hands result here. The session
//! classifies, debounces, and on a confirmed change notifies the
//! registered JS listener and the game round.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::classifier::HAND_SKELETON;
use crate::session::{ConfigHandle, FrameObservation, FrameReport, GestureSession};

/// Floats per landmark in the flat array (x, y, z)
const LANDMARK_STRIDE: usize = 3;

/// MediaPipe is configured for at most two hands
const MAX_HANDS: usize = 2;

#[derive(Default)]
struct CounterState {
    session: GestureSession,
    last_report: FrameReport,
    listener: Option<js_sys::Function>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static COUNTER_STATE: RefCell<CounterState> = RefCell::new(CounterState::default());
}

/// Shared configuration of the running session (for the settings bridge)
pub(super) fn config_handle() -> ConfigHandle {
    COUNTER_STATE.with(|state_cell| state_cell.borrow().session.config().clone())
}

fn process(observation: &FrameObservation) -> u32 {
    let (changed, listener, confirmed) = COUNTER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let report = state.session.on_frame(observation);
        let changed = report.changed;
        state.last_report = report;
        (changed, state.listener.clone(), state.session.confirmed_count())
    });
    
    // Borrow released: listeners may call back into the module
    if let Some(event) = changed {
        super::game_integration::on_count_confirmed(event.count);
        
        if let Some(f) = listener {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(event.count)) {
                web_sys::console::warn_2(&"Finger count listener failed:".into(), &e);
            }
        }
    }
    
    confirmed
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JavaScript with flat Float32Array of `num_hands × 21 × 3`
/// values (x, y, z per landmark). Returns the confirmed finger count.
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) -> u32 {
    let expected = num_hands * 21 * LANDMARK_STRIDE;
    if flat_data.len() < expected {
        web_sys::console::warn_1(
            &format!("Short landmark data: {} (expected {})", flat_data.len(), expected).into()
        );
    }
    
    let observation = FrameObservation::from_flat(flat_data, num_hands.min(MAX_HANDS), LANDMARK_STRIDE);
    process(&observation)
}

/// Called when the detector returned nothing for a frame
#[wasm_bindgen]
pub fn apply_missing_frame() -> u32 {
    process(&FrameObservation::empty())
}

/// Register `callback(count)`, fired once per confirmed count change
#[wasm_bindgen]
pub fn set_count_listener(callback: js_sys::Function) {
    COUNTER_STATE.with(|state_cell| {
        state_cell.borrow_mut().listener = Some(callback);
    });
}

#[wasm_bindgen]
pub fn clear_count_listener() {
    COUNTER_STATE.with(|state_cell| {
        state_cell.borrow_mut().listener = None;
    });
}

#[wasm_bindgen]
pub fn get_confirmed_count() -> u32 {
    COUNTER_STATE.with(|state_cell| state_cell.borrow().session.confirmed_count())
}

/// Raw (undebounced) total of the last frame
#[wasm_bindgen]
pub fn get_frame_total() -> u32 {
    COUNTER_STATE.with(|state_cell| state_cell.borrow().last_report.total)
}

/// Extended flags of the last frame for the overlay: 5 bytes per valid
/// hand (thumb → pinky), 1 = extended
#[wasm_bindgen]
pub fn get_finger_states() -> Vec<u8> {
    COUNTER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        state
            .last_report
            .hands
            .iter()
            .flat_map(|hand| hand.flags())
            .map(u8::from)
            .collect()
    })
}

/// Skeleton connections as flat index pairs for overlay drawing
#[wasm_bindgen]
pub fn get_hand_skeleton() -> Vec<u8> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u8, b as u8])
        .collect()
}

/// Camera stopped or restarted: confirmed count back to 0
#[wasm_bindgen]
pub fn reset_session() {
    COUNTER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.session.reset();
        state.last_report = FrameReport::default();
    });
}
