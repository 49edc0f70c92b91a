//! Counting round state machine
//!
//! Idle → Detecting → WaitingSpeech → Rendering → Celebrating → Detecting ...
//! A wrong answer sends the round back to Detecting.

use tracing::{debug, info};

use super::difficulty::Difficulty;
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    /// Waiting for the child to hold up fingers
    Detecting,
    /// Listening for the spoken number
    WaitingSpeech { expected: u32 },
    /// Pictures being drawn for a correct answer
    Rendering,
    Celebrating,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Detecting => "detecting",
            GamePhase::WaitingSpeech { .. } => "waiting_speech",
            GamePhase::Rendering => "rendering",
            GamePhase::Celebrating => "celebrating",
        }
    }
}

/// What the UI should tell the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// "Detected N fingers, press the button and say the number"
    ShowCount(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct(u32),
    Wrong { spoken: u32, expected: u32 },
}

pub struct GameRound {
    phase: GamePhase,
    difficulty: Difficulty,
    rounds_won: u32,
}

impl GameRound {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            phase: GamePhase::Idle,
            difficulty,
            rounds_won: 0,
        }
    }
    
    pub fn phase(&self) -> GamePhase {
        self.phase
    }
    
    pub fn is_active(&self) -> bool {
        self.phase != GamePhase::Idle
    }
    
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
    
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }
    
    /// Start playing. Needs a working camera.
    pub fn start(&mut self, camera_ready: bool) -> Result<(), GameError> {
        if !camera_ready {
            return Err(GameError::CameraNotReady);
        }
        self.phase = GamePhase::Detecting;
        info!(difficulty = self.difficulty.as_str(), "🎮 Game started");
        Ok(())
    }
    
    /// Confirmed count changed. Ignored while idle or drawing.
    pub fn on_fingers_detected(&mut self, count: u32) -> Option<Prompt> {
        if !self.is_active() || self.phase == GamePhase::Rendering {
            return None;
        }
        debug!(count, phase = self.phase.as_str(), "Fingers detected");
        (count > 0).then_some(Prompt::ShowCount(count))
    }
    
    /// Player pressed "say the number"; `confirmed` becomes the expected answer
    pub fn start_listening(&mut self, confirmed: u32) -> Result<u32, GameError> {
        if !self.is_active() {
            return Err(GameError::NotActive);
        }
        if confirmed == 0 {
            return Err(GameError::NoFingers);
        }
        self.phase = GamePhase::WaitingSpeech { expected: confirmed };
        Ok(confirmed)
    }
    
    /// Number recognised from speech
    pub fn submit_answer(&mut self, spoken: u32) -> Result<AnswerOutcome, GameError> {
        let GamePhase::WaitingSpeech { expected } = self.phase else {
            return Err(GameError::NotListening);
        };
        
        if spoken == expected {
            self.phase = GamePhase::Rendering;
            self.rounds_won += 1;
            info!(count = expected, rounds_won = self.rounds_won, "Correct answer");
            Ok(AnswerOutcome::Correct(expected))
        } else {
            self.phase = GamePhase::Detecting;
            info!(spoken, expected, "Wrong answer");
            Ok(AnswerOutcome::Wrong { spoken, expected })
        }
    }
    
    /// Pictures finished drawing
    pub fn finish_rendering(&mut self) {
        if self.phase == GamePhase::Rendering {
            self.phase = GamePhase::Celebrating;
        }
    }
    
    /// Next round (after celebrating, or to retry)
    pub fn reset_round(&mut self) {
        if self.is_active() {
            self.phase = GamePhase::Detecting;
        }
    }
    
    pub fn stop(&mut self) {
        self.phase = GamePhase::Idle;
        info!("Game stopped");
    }
}

impl Default for GameRound {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_start_requires_camera() {
        let mut game = GameRound::default();
        assert_eq!(game.start(false), Err(GameError::CameraNotReady));
        assert_eq!(game.phase(), GamePhase::Idle);
        game.start(true).unwrap();
        assert_eq!(game.phase(), GamePhase::Detecting);
    }
    
    #[test]
    fn test_prompts_only_when_active() {
        let mut game = GameRound::default();
        assert_eq!(game.on_fingers_detected(3), None);
        game.start(true).unwrap();
        assert_eq!(game.on_fingers_detected(3), Some(Prompt::ShowCount(3)));
        assert_eq!(game.on_fingers_detected(0), None);
    }
    
    #[test]
    fn test_listening_needs_fingers() {
        let mut game = GameRound::default();
        assert_eq!(game.start_listening(2), Err(GameError::NotActive));
        game.start(true).unwrap();
        assert_eq!(game.start_listening(0), Err(GameError::NoFingers));
        assert_eq!(game.start_listening(2), Ok(2));
        assert_eq!(game.phase(), GamePhase::WaitingSpeech { expected: 2 });
    }
    
    #[test]
    fn test_full_round() {
        let mut game = GameRound::default();
        game.start(true).unwrap();
        game.start_listening(4).unwrap();
        assert_eq!(game.submit_answer(4), Ok(AnswerOutcome::Correct(4)));
        assert_eq!(game.phase(), GamePhase::Rendering);
        
        // No prompts while drawing
        assert_eq!(game.on_fingers_detected(2), None);
        
        game.finish_rendering();
        assert_eq!(game.phase(), GamePhase::Celebrating);
        game.reset_round();
        assert_eq!(game.phase(), GamePhase::Detecting);
        assert_eq!(game.rounds_won(), 1);
    }
    
    #[test]
    fn test_wrong_answer_returns_to_detecting() {
        let mut game = GameRound::default();
        game.start(true).unwrap();
        assert_eq!(game.submit_answer(3), Err(GameError::NotListening));
        game.start_listening(3).unwrap();
        assert_eq!(game.submit_answer(5), Ok(AnswerOutcome::Wrong { spoken: 5, expected: 3 }));
        assert_eq!(game.phase(), GamePhase::Detecting);
        assert_eq!(game.rounds_won(), 0);
    }
    
    #[test]
    fn test_stop() {
        let mut game = GameRound::default();
        game.start(true).unwrap();
        game.stop();
        assert!(!game.is_active());
        game.reset_round();
        assert_eq!(game.phase(), GamePhase::Idle);
    }
}
