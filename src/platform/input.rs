//! Keyboard mapping
//!
//! Keys are matched on `KeyboardEvent.key` values. Which keys do anything
//! depends on the session phase: start keys only while idle, lane keys only
//! while running.

use crate::sim::{Command, GamePhase, LaneShift};

/// Decode a key press for the current phase
pub fn command_for_key(key: &str, phase: GamePhase) -> Option<Command> {
    match phase {
        GamePhase::Idle => match key {
            " " | "Enter" => Some(Command::Start),
            _ => None,
        },
        GamePhase::Running => match key {
            "ArrowUp" | "w" | "W" => Some(Command::Lane(LaneShift::Up)),
            "ArrowDown" | "s" | "S" => Some(Command::Lane(LaneShift::Down)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keys_only_when_idle() {
        assert_eq!(command_for_key(" ", GamePhase::Idle), Some(Command::Start));
        assert_eq!(command_for_key("Enter", GamePhase::Idle), Some(Command::Start));
        assert_eq!(command_for_key(" ", GamePhase::Running), None);
        assert_eq!(command_for_key("Enter", GamePhase::Running), None);
    }

    #[test]
    fn test_lane_keys_only_when_running() {
        let up = Some(Command::Lane(LaneShift::Up));
        let down = Some(Command::Lane(LaneShift::Down));
        assert_eq!(command_for_key("ArrowUp", GamePhase::Running), up);
        assert_eq!(command_for_key("w", GamePhase::Running), up);
        assert_eq!(command_for_key("ArrowDown", GamePhase::Running), down);
        assert_eq!(command_for_key("s", GamePhase::Running), down);
        assert_eq!(command_for_key("ArrowUp", GamePhase::Idle), None);
        assert_eq!(command_for_key("x", GamePhase::Running), None);
    }
}
