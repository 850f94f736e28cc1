//! Main AI engine: one-ply heuristic move selection
//!
//! Every empty cell is scored independently and the highest score wins.
//! The selection follows a fixed order:
//!
//! 1. **Opening book**: center reply to a lone opponent stone, center on an
//!    empty board
//! 2. **Last cell**: a single empty cell is returned without evaluation
//! 3. **Scoring**: each empty cell gets a [`CellScore`]; an immediate win
//!    scores 100000, blocking the opponent's five scores 50000, anything else
//!    is the blended heuristic
//!
//! Cells are ranked by tier (win, block, heuristic) and then by total. Ties keep the first cell in row-major order, so the result is fully
//! determined by the board and the side to move.
//!
//! # Example
//!
//! ```
//! use wuziqi::{AIEngine, Board, Pos, Stone};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new(15).unwrap();
//! board.place_stone(Pos::new(3, 3), Stone::Black);
//!
//! let result = engine.select_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Decision: {:?}", result.decision);
//! ```

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};
use rayon::prelude::*;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{score_cell, CellScore, GamePhase, PositionReport, ScoreTier};

/// A selected cell and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub score: i64,
}

/// Which step of the selection order produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Center reply from the opening book
    OpeningBook,
    /// Only one empty cell was left
    LastCell,
    /// The move completes five
    ImmediateWin,
    /// The move stops the opponent's five
    Block,
    /// Best blended heuristic score
    Heuristic,
    /// No empty cell, no move
    BoardFull,
}

/// Result of a move selection with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Option<Move>,
    pub decision: Decision,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidate cells scored
    pub evaluated: usize,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Pos, decision: Decision, start: Instant) -> Self {
        Self {
            best_move: Some(Move { pos, score: 0 }),
            decision,
            time_ms: elapsed_ms(start),
            evaluated: 0,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self {
            best_move: None,
            decision: Decision::BoardFull,
            time_ms: elapsed_ms(start),
            evaluated: 0,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Wuziqi move-selection engine.
///
/// Stateless apart from its configuration: it never mutates the board it is
/// given, so one engine can serve any number of games.
///
/// # Example
///
/// ```
/// use wuziqi::{AIEngine, Board, EngineConfig, Pos, Stone};
///
/// let engine = AIEngine::with_config(EngineConfig { parallel: false });
/// let mut board = Board::new(15).unwrap();
/// board.place_stone(Pos::new(0, 0), Stone::Black);
/// if let Some(mv) = engine.select_move(&board, Stone::White) {
///     println!("Play at ({}, {})", mv.pos.row, mv.pos.col);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default configuration (parallel scoring)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Best move for `player`, or `None` when the board has no empty cell
    pub fn select_move(&self, board: &Board, player: Stone) -> Option<Move> {
        self.select_move_with_stats(board, player).best_move
    }

    /// Best move together with the decision that produced it
    #[must_use]
    pub fn select_move_with_stats(&self, board: &Board, player: Stone) -> MoveResult {
        let start = Instant::now();

        if player == Stone::Empty || board.is_full() {
            return MoveResult::no_move(start);
        }

        // 0. Opening book
        if let Some(pos) = self.opening_move(board, player) {
            debug!("{player:?} opening book move at ({}, {})", pos.row, pos.col);
            return MoveResult::shortcut(pos, Decision::OpeningBook, start);
        }

        // 1. Forced move
        if board.empty_count() == 1 {
            if let Some(pos) = board.empty_positions().next() {
                debug!("{player:?} takes last empty cell ({}, {})", pos.row, pos.col);
                return MoveResult::shortcut(pos, Decision::LastCell, start);
            }
        }

        if log_enabled!(Level::Debug) {
            debug!("position: {}", PositionReport::analyze(board));
        }

        // 2. Score every empty cell
        let phase = GamePhase::from_stone_count(board.stone_count());
        let scored = self.score_candidates(board, player, phase);
        let evaluated = scored.len();

        let Some((pos, best)) = pick_best(scored) else {
            return MoveResult::no_move(start);
        };

        let decision = match best.tier {
            ScoreTier::Win => Decision::ImmediateWin,
            ScoreTier::Block => Decision::Block,
            ScoreTier::Heuristic => Decision::Heuristic,
        };
        debug!(
            "{player:?} plays ({}, {}) score={} decision={decision:?} phase={phase:?} evaluated={evaluated}",
            pos.row, pos.col, best.total
        );

        MoveResult {
            best_move: Some(Move {
                pos,
                score: best.total,
            }),
            decision,
            time_ms: elapsed_ms(start),
            evaluated,
        }
    }

    /// Score all empty cells, in row-major order either way
    fn score_candidates(
        &self,
        board: &Board,
        player: Stone,
        phase: GamePhase,
    ) -> Vec<(Pos, CellScore)> {
        let candidates: Vec<Pos> = board.empty_positions().collect();
        if self.config.parallel {
            candidates
                .par_iter()
                .map(|&pos| (pos, score_cell(board, pos, player, phase)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|&pos| (pos, score_cell(board, pos, player, phase)))
                .collect()
        }
    }

    /// Opening book.
    ///
    /// - Empty board: play center
    /// - A single opponent stone: answer at center if it is free
    fn opening_move(&self, board: &Board, player: Stone) -> Option<Pos> {
        let center = board.center();
        match board.stone_count() {
            0 => Some(center),
            1 if board.count(player.opponent()) == 1 && board.is_empty(center) => Some(center),
            _ => None,
        }
    }
}

/// Strictly best score by tier then total; the first maximum in scan order is kept
fn pick_best(scored: Vec<(Pos, CellScore)>) -> Option<(Pos, CellScore)> {
    let mut best: Option<(Pos, CellScore)> = None;
    for (pos, score) in scored {
        trace!(
            "({}, {}) total={} off={} def={} strat={} {:?}",
            pos.row,
            pos.col,
            score.total,
            score.offense,
            score.defense,
            score.strategic,
            score.tier
        );
        if best.as_ref().map_or(true, |(_, b)| score.outranks(b)) {
            best = Some((pos, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Tier;

    fn sequential() -> AIEngine {
        AIEngine::with_config(EngineConfig { parallel: false })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert!(engine.config().parallel);
        assert!(!sequential().config().parallel);
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new(15).unwrap();
        let result = sequential().select_move_with_stats(&board, Stone::Black);
        assert_eq!(result.best_move.map(|m| m.pos), Some(Pos::new(7, 7)));
        assert_eq!(result.decision, Decision::OpeningBook);
    }

    #[test]
    fn test_opening_reply_to_lone_opponent_stone() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Pos::new(2, 11), Stone::Black);
        let result = sequential().select_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move.map(|m| m.pos), Some(Pos::new(7, 7)));
        assert_eq!(result.decision, Decision::OpeningBook);
    }

    #[test]
    fn test_opening_skipped_when_center_taken() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let result = sequential().select_move_with_stats(&board, Stone::White);
        assert_ne!(result.decision, Decision::OpeningBook);
        let mv = result.best_move.unwrap();
        assert_ne!(mv.pos, Pos::new(7, 7));
        assert!(board.is_empty(mv.pos));
    }

    #[test]
    fn test_opening_not_used_for_own_stone() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        let result = sequential().select_move_with_stats(&board, Stone::Black);
        assert_ne!(result.decision, Decision::OpeningBook);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(15).unwrap();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::White);

        let result = sequential().select_move_with_stats(&board, Stone::Black);
        let mv = result.best_move.unwrap();
        assert!(mv.pos == Pos::new(7, 4) || mv.pos == Pos::new(7, 9));
        assert!(mv.score >= 45_000);
        assert_eq!(mv.score, Tier::WIN);
        assert_eq!(result.decision, Decision::ImmediateWin);
        // Row-major tie-break picks the earlier cell
        assert_eq!(mv.pos, Pos::new(7, 4));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(15).unwrap();
        for c in 5..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::White);

        let result = sequential().select_move_with_stats(&board, Stone::White);
        let mv = result.best_move.unwrap();
        assert_eq!(mv.pos, Pos::new(7, 4));
        assert!(mv.score >= 40_000);
        assert_eq!(mv.score, Tier::BLOCK_WIN);
        assert_eq!(result.decision, Decision::Block);
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new(15).unwrap();
        // White threatens (0,4); Black can win at (10,9)
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        for c in 5..9 {
            board.place_stone(Pos::new(10, c), Stone::Black);
        }
        board.place_stone(Pos::new(10, 4), Stone::White);

        let mv = sequential().select_move(&board, Stone::Black).unwrap();
        assert_eq!(mv.pos, Pos::new(10, 9));
        assert_eq!(mv.score, Tier::WIN);
    }

    #[test]
    fn test_last_empty_cell() {
        let board = Board::from_rows(&[
            "XXOOX",
            "OOXXO",
            "XX.OX",
            "OOXXO",
            "XXOOX",
        ])
        .unwrap();
        let result = sequential().select_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move.map(|m| m.pos), Some(Pos::new(2, 2)));
        assert_eq!(result.decision, Decision::LastCell);
        assert_eq!(result.evaluated, 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows(&[
            "XXOOX",
            "OOXXO",
            "XXOOX",
            "OOXXO",
            "XXOOX",
        ])
        .unwrap();
        let result = sequential().select_move_with_stats(&board, Stone::Black);
        assert!(result.best_move.is_none());
        assert_eq!(result.decision, Decision::BoardFull);
        assert!(AIEngine::new().select_move(&board, Stone::White).is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::new(15).unwrap();
        let stones = [
            (7, 7, Stone::Black),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
            (6, 6, Stone::White),
            (9, 7, Stone::Black),
            (10, 7, Stone::White),
        ];
        for (r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        let parallel = AIEngine::with_config(EngineConfig { parallel: true });
        for player in [Stone::Black, Stone::White] {
            let a = sequential().select_move(&board, player);
            let b = parallel.select_move(&board, player);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_evaluated_counts_empty_cells() {
        let mut board = Board::new(9).unwrap();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        board.place_stone(Pos::new(4, 5), Stone::White);
        let result = sequential().select_move_with_stats(&board, Stone::Black);
        assert_eq!(result.evaluated, 79);
        assert!(board.is_empty(result.best_move.unwrap().pos));
    }

    #[test]
    fn test_mid_game_prefers_stronger_threat_above_block_score() {
        // White: open three on row 2, and two threes crossing at (10,8)
        // that become a double open four there
        let mut board = Board::new(15).unwrap();
        let white = [
            (2, 2), (2, 3), (2, 4),
            (10, 5), (10, 6), (10, 7),
            (7, 8), (8, 8), (9, 8),
        ];
        for (r, c) in white {
            board.place_stone(Pos::new(r, c), Stone::White);
        }
        for (r, c) in [(0, 14), (14, 0), (14, 14), (12, 13)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        assert_eq!(GamePhase::from_stone_count(board.stone_count()), GamePhase::Mid);

        // Both candidates score above the block tier
        let single = score_cell(&board, Pos::new(2, 1), Stone::Black, GamePhase::Mid);
        let fork = score_cell(&board, Pos::new(10, 8), Stone::Black, GamePhase::Mid);
        assert!(single.total > Tier::BLOCK_WIN);
        assert_eq!(fork.defense, 105_300);
        assert_eq!(fork.total, 136_953);
        assert!(fork.outranks(&single));

        for engine in [sequential(), AIEngine::new()] {
            let result = engine.select_move_with_stats(&board, Stone::Black);
            let mv = result.best_move.unwrap();
            assert_eq!(mv.pos, Pos::new(10, 8));
            assert_eq!(mv.score, 136_953);
            assert_eq!(result.decision, Decision::Heuristic);
        }
    }

    #[test]
    fn test_pick_best_ranks_tier_before_total() {
        let scored = vec![
            (
                Pos::new(0, 0),
                CellScore {
                    total: 136_953,
                    tier: ScoreTier::Heuristic,
                    offense: 0,
                    defense: 0,
                    strategic: 0,
                },
            ),
            (
                Pos::new(0, 1),
                CellScore {
                    total: Tier::BLOCK_WIN,
                    tier: ScoreTier::Block,
                    offense: 0,
                    defense: 0,
                    strategic: 0,
                },
            ),
        ];
        assert_eq!(pick_best(scored).map(|(p, _)| p), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_pick_best_keeps_first_maximum() {
        let score = |total| CellScore {
            total,
            tier: ScoreTier::Heuristic,
            offense: 0,
            defense: 0,
            strategic: 0,
        };
        let scored = vec![
            (Pos::new(0, 1), score(5)),
            (Pos::new(0, 2), score(9)),
            (Pos::new(1, 0), score(9)),
            (Pos::new(1, 1), score(3)),
        ];
        assert_eq!(pick_best(scored).map(|(p, _)| p), Some(Pos::new(0, 2)));
        assert!(pick_best(vec![]).is_none());
    }
}
