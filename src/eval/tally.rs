//! Position-wide threat tally, for diagnostics only
//!
//! Walks every empty cell and classifies what each side could create there.
//! Move selection never reads this; the engine logs it at debug level.

use std::fmt;

use crate::board::{Board, Overlay, Stone};

use super::analyzer::analyze_cell;
use super::phase::GamePhase;

/// Per-player counts of empty cells by the strongest threat they would create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreatTally {
    /// Cells completing five
    pub severe: u32,
    /// Cells creating a live four or a double three
    pub high: u32,
    /// Cells creating a live three
    pub medium: u32,
    /// Cells creating a live two
    pub low: u32,
}

impl ThreatTally {
    /// Tally every empty cell of `board` for `player`
    pub fn for_player(board: &Board, player: Stone) -> Self {
        let mut tally = Self::default();
        for pos in board.empty_positions() {
            let threats = analyze_cell(&Overlay::new(board, pos, player), pos, player);
            if threats.is_win() {
                tally.severe += 1;
            } else if threats.live_fours > 0 || threats.double_threes() > 0 {
                tally.high += 1;
            } else if threats.live_threes > 0 {
                tally.medium += 1;
            } else if threats.live_twos > 0 {
                tally.low += 1;
            }
        }
        tally
    }
}

/// Phase plus both sides' tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReport {
    pub phase: GamePhase,
    pub stones: u32,
    pub black: ThreatTally,
    pub white: ThreatTally,
}

impl PositionReport {
    pub fn analyze(board: &Board) -> Self {
        let stones = board.stone_count();
        Self {
            phase: GamePhase::from_stone_count(stones),
            stones,
            black: ThreatTally::for_player(board, Stone::Black),
            white: ThreatTally::for_player(board, Stone::White),
        }
    }
}

impl fmt::Display for ThreatTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "severe={} high={} medium={} low={}",
            self.severe, self.high, self.medium, self.low
        )
    }
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({} stones) black[{}] white[{}]",
            self.phase, self.stones, self.black, self.white
        )
    }
}
