//! Game integration - connects confirmed counts with the counting round
//!
//! Speech recognition runs in JavaScript; it calls `submit_answer` with the
//! number it heard.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use super::hand_landmarks::get_confirmed_count;
use crate::game::{AnswerOutcome, Difficulty, GameRound, Prompt};

#[derive(Default)]
struct GameState {
    round: GameRound,
    camera_ready: bool,
    /// Latest prompt for the status line
    prompt: Option<Prompt>,
}

thread_local! {
    static GAME_STATE: RefCell<GameState> = RefCell::new(GameState::default());
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Confirmed finger count changed (called from the landmark bridge)
pub(super) fn on_count_confirmed(count: u32) {
    GAME_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        if let Some(prompt) = state.round.on_fingers_detected(count) {
            state.prompt = Some(prompt);
        }
    });
}

pub(super) fn apply_difficulty(difficulty: Difficulty) {
    GAME_STATE.with(|state_cell| state_cell.borrow_mut().round.set_difficulty(difficulty));
}

pub(super) fn current_difficulty() -> Difficulty {
    GAME_STATE.with(|state_cell| state_cell.borrow().round.difficulty())
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JS once the camera stream is running (or failed)
#[wasm_bindgen]
pub fn set_camera_ready(ready: bool) {
    GAME_STATE.with(|state_cell| state_cell.borrow_mut().camera_ready = ready);
}

#[wasm_bindgen]
pub fn set_difficulty(name: &str) -> Result<(), JsValue> {
    let difficulty: Difficulty = name.parse().map_err(js_error)?;
    apply_difficulty(difficulty);
    Ok(())
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    GAME_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let camera_ready = state.camera_ready;
        state.round.start(camera_ready).map_err(js_error)
    })
}

/// Player asked to answer. Returns the expected number.
#[wasm_bindgen]
pub fn start_listening() -> Result<u32, JsValue> {
    let confirmed = get_confirmed_count();
    GAME_STATE.with(|state_cell| {
        state_cell.borrow_mut().round.start_listening(confirmed).map_err(js_error)
    })
}

/// Number heard by speech recognition. Returns true when correct.
#[wasm_bindgen]
pub fn submit_answer(spoken: u32) -> Result<bool, JsValue> {
    GAME_STATE.with(|state_cell| {
        let outcome = state_cell.borrow_mut().round.submit_answer(spoken).map_err(js_error)?;
        Ok(matches!(outcome, AnswerOutcome::Correct(_)))
    })
}

#[wasm_bindgen]
pub fn finish_rendering() {
    GAME_STATE.with(|state_cell| state_cell.borrow_mut().round.finish_rendering());
}

#[wasm_bindgen]
pub fn reset_round() {
    GAME_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.round.reset_round();
        state.prompt = None;
    });
}

#[wasm_bindgen]
pub fn stop_game() {
    GAME_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.round.stop();
        state.prompt = None;
    });
}

/// Phase name for the UI ("idle", "detecting", "waiting_speech", ...)
#[wasm_bindgen]
pub fn game_phase() -> String {
    GAME_STATE.with(|state_cell| state_cell.borrow().round.phase().as_str().to_string())
}

/// Finger count to show in the status prompt, 0 when there is none
#[wasm_bindgen]
pub fn prompt_count() -> u32 {
    GAME_STATE.with(|state_cell| match state_cell.borrow().prompt {
        Some(Prompt::ShowCount(n)) => n,
        None => 0,
    })
}
