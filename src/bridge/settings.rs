//! Settings panel entry points
//! 
//! Validation happens in Rust; a rejected value returns false (or an error)
//! and the previous setting stays in effect.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use super::hand_landmarks::config_handle;
use crate::settings::Settings;

thread_local! {
    /// Last applied settings document (voice/SFX flags live only here)
    static SETTINGS: RefCell<Settings> = RefCell::new(Settings::default());
}

#[wasm_bindgen]
pub fn set_finger_threshold(finger: &str, degrees: f32) -> bool {
    config_handle().set_threshold_by_name(finger, degrees).is_ok()
}

#[wasm_bindgen]
pub fn set_min_frames_consistent(frames: usize) -> bool {
    config_handle().set_min_frames_consistent(frames).is_ok()
}

/// Sensitivity slider 1-5 (5 = fastest response)
#[wasm_bindgen]
pub fn set_sensitivity(sensitivity: u32) -> bool {
    let accepted = config_handle().set_sensitivity(sensitivity).is_ok();
    if accepted {
        SETTINGS.with(|s| s.borrow_mut().sensitivity = sensitivity);
    }
    accepted
}

/// Apply a saved settings document (from localStorage)
#[wasm_bindgen]
pub fn apply_settings_json(json: &str) -> Result<(), JsValue> {
    let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let detection = settings.detection_config().map_err(|e| JsValue::from_str(&e.to_string()))?;
    
    config_handle()
        .replace(detection)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    super::game_integration::apply_difficulty(settings.difficulty);
    
    SETTINGS.with(|s| *s.borrow_mut() = settings);
    web_sys::console::log_1(&"✅ Settings loaded".into());
    Ok(())
}

/// Current settings as a JSON document for localStorage
#[wasm_bindgen]
pub fn current_settings_json() -> Result<String, JsValue> {
    let detection = config_handle().snapshot();
    let difficulty = super::game_integration::current_difficulty();
    
    SETTINGS.with(|s| {
        let mut settings = s.borrow().clone().with_detection(&detection);
        settings.difficulty = difficulty;
        settings.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
