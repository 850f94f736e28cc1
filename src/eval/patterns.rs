//! Score tables for Wuziqi move evaluation
//!
//! Every weight the scorer uses lives here, so the tier ordering can be
//! checked in one place. Scores are integers; fractional multipliers are
//! expressed in percent.

use crate::board::RunPattern;

/// Terminal tier scores. Ranking compares the tier before the total, so a
/// winning cell outranks a blocking cell, which outranks any heuristic
/// total however large.
pub struct Tier;

impl Tier {
    /// Placing here completes five or more
    pub const WIN: i64 = 100_000;
    /// The opponent would complete five here
    pub const BLOCK_WIN: i64 = 50_000;
}

/// Weights for the mover's own threats after placing at the cell
pub struct OffenseScore;

impl OffenseScore {
    pub const LIVE_FOUR: i64 = 10_000;
    /// Two or more double-threes
    pub const MULTI_DOUBLE_THREE: i64 = 8_000;
    pub const DOUBLE_THREE: i64 = 4_000;
    pub const LIVE_THREE: i64 = 3_000;
    pub const FOUR: i64 = 2_000;
    /// Per opponent stone at Manhattan distance 1, divided by distance further out
    pub const PROXIMITY: i64 = 30;
    /// Half-width of the box searched for nearby opponent stones
    pub const PROXIMITY_RADIUS: i32 = 2;
}

/// Weights for the opponent's threats if they took the cell instead
pub struct DefenseScore;

impl DefenseScore {
    pub const LIVE_FOUR: i64 = 40_000;
    pub const MULTI_DOUBLE_THREE: i64 = 20_000;
    pub const DOUBLE_THREE: i64 = 15_000;
    pub const LIVE_THREE: i64 = 12_000;
    pub const FOUR: i64 = 10_000;
    /// Blocking value by number of opponent stones in line with the cell
    pub const BLOCK_ONE: i64 = 500;
    pub const BLOCK_TWO: i64 = 1_500;
    pub const BLOCK_THREE_PLUS: i64 = 3_000;
    /// Share of the blocking sum that enters the defensive score
    pub const BLOCK_SCALE_PCT: i64 = 80;
    /// Flat bonus for central cells and intersections of opponent lines
    pub const KEY_POINT: i64 = 500;
    pub const KEY_POINT_CENTER_RADIUS: u32 = 3;
}

/// Static per-direction run values used by the strategic term
pub struct PositionalScore;

impl PositionalScore {
    pub const FIVE: i64 = 10_000;
    pub const LIVE_FOUR: i64 = 2_000;
    pub const BLOCKED_FOUR: i64 = 500;
    pub const LIVE_THREE: i64 = 200;
    pub const BLOCKED_THREE: i64 = 50;
    pub const LIVE_TWO: i64 = 20;
    pub const BLOCKED_TWO: i64 = 5;
    /// Center bonus per half-cell of Manhattan distance saved
    pub const CENTER_WEIGHT: i64 = 1;
}

/// Offense/defense blend thresholds for the middle game
pub struct Blend;

impl Blend {
    /// Gap above which the dominant side is emphasised
    pub const MID_DOMINANCE_GAP: i64 = 3_000;
    pub const MID_DOMINANT_PCT: i64 = 130;
    pub const MID_RECESSIVE_PCT: i64 = 70;
}

/// Static value of one run for the strategic term.
///
/// Unlike the threat predicates this distinguishes a run open at both ends
/// ("live") from one open at a single end ("blocked"); fully closed runs
/// score nothing below five.
pub fn positional_run_score(run: RunPattern) -> i64 {
    match (run.count, run.open_ends) {
        (5.., _) => PositionalScore::FIVE,
        (4, 2) => PositionalScore::LIVE_FOUR,
        (4, 1) => PositionalScore::BLOCKED_FOUR,
        (3, 2) => PositionalScore::LIVE_THREE,
        (3, 1) => PositionalScore::BLOCKED_THREE,
        (2, 2) => PositionalScore::LIVE_TWO,
        (2, 1) => PositionalScore::BLOCKED_TWO,
        _ => 0,
    }
}

/// Blocking value for `n` opponent stones in line with a cell
pub fn blocking_weight(n: u32) -> i64 {
    match n {
        0 => 0,
        1 => DefenseScore::BLOCK_ONE,
        2 => DefenseScore::BLOCK_TWO,
        _ => DefenseScore::BLOCK_THREE_PLUS,
    }
}

/// Apply a percentage multiplier
#[inline]
pub fn scale_pct(value: i64, pct: i64) -> i64 {
    value * pct / 100
}
