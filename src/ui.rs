//! Overlay content
//!
//! The message box over the canvas shows either the start prompt or the
//! game-over summary. Content is plain data here; `platform::dom` writes it
//! into the page.

use crate::sim::{GamePhase, GameState};

/// What the overlay should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Hidden while a session runs
    Hidden,
    /// Title screen with controls
    Start,
    /// Collision ended the session
    GameOver { score: u64 },
}

impl Overlay {
    /// Overlay for the current session state
    pub fn for_state(state: &GameState) -> Self {
        match state.phase {
            GamePhase::Running => Overlay::Hidden,
            GamePhase::Idle if state.game_over => Overlay::GameOver { score: state.score },
            GamePhase::Idle => Overlay::Start,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Overlay::Hidden)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Overlay::Hidden => "",
            Overlay::Start => "Dolphin swim \u{1F42C}",
            Overlay::GameOver { .. } => "GAME OVER!",
        }
    }

    /// Body paragraphs
    pub fn lines(&self) -> Vec<String> {
        match self {
            Overlay::Hidden => Vec::new(),
            Overlay::Start => vec![
                "Dodge the trash by moving between the water lanes.".to_string(),
                "Controls: Arrow Up/Down or W/S".to_string(),
            ],
            Overlay::GameOver { score } => vec![
                "Your dolphin crashed into the trash.".to_string(),
                format!("Final score: {}", score),
            ],
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Overlay::Hidden => "",
            Overlay::Start => "Press SPACE or click to start",
            Overlay::GameOver { .. } => "Play again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::start_session;
    use glam::Vec2;

    #[test]
    fn test_overlay_follows_session() {
        let mut state = GameState::new(1, Vec2::new(800.0, 400.0), Tuning::default());
        assert_eq!(Overlay::for_state(&state), Overlay::Start);

        start_session(&mut state);
        assert_eq!(Overlay::for_state(&state), Overlay::Hidden);
        assert!(!Overlay::Hidden.is_visible());

        state.score = 12;
        state.game_over = true;
        state.phase = GamePhase::Idle;
        let overlay = Overlay::for_state(&state);
        assert_eq!(overlay, Overlay::GameOver { score: 12 });
        assert!(overlay.lines().iter().any(|l| l.contains("12")));
        assert_eq!(overlay.button_label(), "Play again");
    }

    #[test]
    fn test_start_prompt_lists_controls() {
        let lines = Overlay::Start.lines();
        assert!(lines.iter().any(|l| l.contains("W/S")));
    }
}
