//! Coarse game phase derived from stone count

use super::patterns::{scale_pct, Blend};

/// Highest stone count still considered the opening
pub const EARLY_MAX_STONES: u32 = 10;
/// Highest stone count still considered the middle game
pub const MID_MAX_STONES: u32 = 40;

/// Match progress, recomputed from the board on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

impl GamePhase {
    pub fn from_stone_count(stones: u32) -> Self {
        if stones <= EARLY_MAX_STONES {
            GamePhase::Early
        } else if stones <= MID_MAX_STONES {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }

    /// Multiplier applied to the offensive score, in percent
    pub fn offense_multiplier_pct(self) -> i64 {
        match self {
            GamePhase::Early => 110,
            GamePhase::Mid => 100,
            GamePhase::Late => 130,
        }
    }

    /// Combine offensive and defensive scores.
    ///
    /// The middle game returns `None` when neither side dominates; the
    /// caller then adds the strategic term to the plain sum.
    pub fn blend(self, offense: i64, defense: i64) -> Option<i64> {
        match self {
            GamePhase::Early => Some(scale_pct(offense, 120) + scale_pct(defense, 80)),
            GamePhase::Late => Some(scale_pct(offense, 140) + scale_pct(defense, 60)),
            GamePhase::Mid => {
                if (offense - defense).abs() > Blend::MID_DOMINANCE_GAP {
                    let (larger, smaller) = if offense > defense {
                        (offense, defense)
                    } else {
                        (defense, offense)
                    };
                    Some(
                        scale_pct(larger, Blend::MID_DOMINANT_PCT)
                            + scale_pct(smaller, Blend::MID_RECESSIVE_PCT),
                    )
                } else {
                    None
                }
            }
        }
    }
}
