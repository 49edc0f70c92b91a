//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;
mod settings;
mod game_integration;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    apply_missing_frame,
    set_count_listener,
    clear_count_listener,
    get_confirmed_count,
    get_frame_total,
    get_finger_states,
    get_hand_skeleton,
    reset_session,
};

pub use settings::{
    set_finger_threshold,
    set_min_frames_consistent,
    set_sensitivity,
    apply_settings_json,
    current_settings_json,
};

pub use game_integration::{
    set_camera_ready,
    set_difficulty,
    start_game,
    start_listening,
    submit_answer,
    finish_rendering,
    reset_round,
    stop_game,
    game_phase,
    prompt_count,
};
