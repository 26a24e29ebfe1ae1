//! HUD text: elapsed time, seed, score and remaining steps.

use crate::core::{GameSnapshot, Phase};
use crate::types::TICKS_PER_SECOND;

/// Format a tick count as `MM:SS`.
///
/// Minutes are not capped at 59; a long session reads `123:04`.
pub fn format_elapsed(ticks: u32, ticks_per_second: u32) -> String {
    let tps = ticks_per_second.max(1);
    let minutes = ticks / (60 * tps);
    let seconds = (ticks / tps) % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Status lines shown under the board.
pub fn hud_lines(snap: &GameSnapshot) -> [String; 3] {
    let status = if snap.complete {
        "COMPLETE"
    } else {
        match snap.phase {
            Phase::Exhausted => "OUT OF STEPS",
            Phase::PendingFlipBack => "NO MATCH",
            Phase::OneFlipped | Phase::Idle => "",
        }
    };

    [
        format!(
            "Time: {}   Seed: {}",
            format_elapsed(snap.elapsed_ticks, TICKS_PER_SECOND),
            snap.seed
        ),
        format!("Score: {}   Steps Left: {}", snap.score, snap.steps_remaining),
        status.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0, 10), "00:00");
        assert_eq!(format_elapsed(9, 10), "00:00");
        assert_eq!(format_elapsed(10, 10), "00:01");
        assert_eq!(format_elapsed(599, 10), "00:59");
        assert_eq!(format_elapsed(600, 10), "01:00");
        assert_eq!(format_elapsed(6_250, 10), "10:25");
        assert_eq!(format_elapsed(36_000 * 2, 10), "120:00");
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        assert_eq!(format_elapsed(61, 0), "01:01");
    }

    #[test]
    fn hud_reflects_snapshot() {
        let mut snap = GameSnapshot::default();
        snap.elapsed_ticks = 125;
        snap.score = 20;
        snap.steps_remaining = 97;
        snap.seed = 42;
        let lines = hud_lines(&snap);
        assert_eq!(lines[0], "Time: 00:12   Seed: 42");
        assert_eq!(lines[1], "Score: 20   Steps Left: 97");
        assert_eq!(lines[2], "");

        snap.phase = Phase::Exhausted;
        assert_eq!(hud_lines(&snap)[2], "OUT OF STEPS");

        snap.complete = true;
        assert_eq!(hud_lines(&snap)[2], "COMPLETE");
    }
}
