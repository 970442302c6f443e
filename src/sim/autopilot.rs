//! Demo autopilot
//!
//! Plays the game for headless runs: when debris is closing in on the
//! swimmer's lane, move toward the neighbouring lane with the most room.

use super::lanes::Lanes;
use super::state::GameState;
use super::swimmer::LaneShift;
use super::tick::Command;
use crate::consts::LANE_COUNT;

/// Start dodging once debris is this close to the swimmer's nose (px)
pub const DANGER_DISTANCE: f32 = 260.0;

/// Horizontal room in front of the swimmer in each lane
///
/// Debris already overlapping the swimmer horizontally counts as zero room;
/// debris fully behind it is ignored.
pub fn lane_clearance(state: &GameState) -> [f32; LANE_COUNT] {
    let swimmer = &state.swimmer;
    let nose = swimmer.pos.x + swimmer.size.x;
    let mut clearance = [f32::INFINITY; LANE_COUNT];

    for obstacle in &state.obstacles {
        if obstacle.right() <= swimmer.pos.x {
            continue;
        }
        let lane = state.lanes.nearest(obstacle.pos.y);
        let room = (obstacle.pos.x - nose).max(0.0);
        clearance[lane] = clearance[lane].min(room);
    }
    clearance
}

/// Command the autopilot would issue this frame, if any
pub fn autopilot_command(state: &GameState) -> Option<Command> {
    if !state.is_running() || state.swimmer.in_transition {
        return None;
    }

    let clearance = lane_clearance(state);
    let lane = state.swimmer.lane;
    if clearance[lane] > DANGER_DISTANCE {
        return None;
    }

    [LaneShift::Up, LaneShift::Down]
        .into_iter()
        .filter_map(|shift| {
            let target = lane as i32 + shift.delta();
            Lanes::contains(target).then(|| (shift, clearance[target as usize]))
        })
        .filter(|&(_, room)| room > clearance[lane])
        .fold(None, |best: Option<(LaneShift, f32)>, candidate| match best {
            Some(b) if b.1 >= candidate.1 => Some(b),
            _ => Some(candidate),
        })
        .map(|(shift, _)| Command::Lane(shift))
}
