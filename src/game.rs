//! Game session: turn order, win and draw bookkeeping
//!
//! The engine only reads boards; [`Game`] owns the board and applies moves,
//! whether they come from a player or from [`AIEngine`].

use log::info;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Move};
use crate::error::{BoardError, GameError};
use crate::rules::{find_five_line, has_five_at_pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat); the engine may still move for either side
    PvP,
    /// Player vs AI
    PvE { ai_color: Stone },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            ai_color: Stone::White,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub history: Vec<(Pos, Stone)>,
}

impl Game {
    pub fn new(size: usize, mode: GameMode) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            mode,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            history: Vec::new(),
        })
    }

    /// Clear the board and start over with Black to move
    pub fn reset(&mut self) {
        let size = self.board.size();
        // Size was validated when the board was first built
        if let Ok(board) = Board::new(size) {
            self.board = board;
        }
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.history.clear();
    }

    /// Switch mode; the game restarts
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { ai_color } => self.current_turn == ai_color,
            GameMode::PvP => true,
        }
    }

    /// Place the side-to-move's stone at `pos`
    pub fn play(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let color = self.current_turn;
        self.board.try_place(pos, color)?;
        self.history.push((pos, color));
        self.last_move = Some(pos);

        if has_five_at_pos(&self.board, pos, color) {
            let line = winning_line(&self.board, pos).unwrap_or_else(|| vec![pos]);
            info!(
                "{color:?} wins with ({}, {}) after {} moves",
                pos.row,
                pos.col,
                self.history.len()
            );
            self.outcome = Some(GameOutcome::Win {
                winner: color,
                line,
            });
            return Ok(());
        }

        if self.board.is_full() {
            info!("board full after {} moves, draw", self.history.len());
            self.outcome = Some(GameOutcome::Draw);
            return Ok(());
        }

        self.current_turn = color.opponent();
        Ok(())
    }

    /// Let `engine` pick and play a move for the side to move
    pub fn play_ai(&mut self, engine: &AIEngine) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if let GameMode::PvE { ai_color } = self.mode {
            if self.current_turn != ai_color {
                return Err(GameError::NotAiTurn {
                    to_move: self.current_turn,
                    ai_color,
                });
            }
        }

        let mv = engine
            .select_move(&self.board, self.current_turn)
            .ok_or(GameError::NoMoveAvailable)?;
        self.play(mv.pos)?;
        Ok(mv)
    }

    pub fn winner(&self) -> Option<Stone> {
        match &self.outcome {
            Some(GameOutcome::Win { winner, .. }) => Some(*winner),
            _ => None,
        }
    }
}

/// Cells of the five-or-more line through the stone at `pos`
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    if !board.contains(pos) {
        return None;
    }
    match board.get(pos) {
        Stone::Empty => None,
        stone => find_five_line(board, pos, stone),
    }
}

/// Uniformly random empty cell, `None` on a full board
pub fn random_empty_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<Pos> {
    let empties: Vec<Pos> = board.empty_positions().collect();
    if empties.is_empty() {
        return None;
    }
    Some(empties[rng.random_range(0..empties.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pvp(size: usize) -> Game {
        Game::new(size, GameMode::PvP).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = pvp(15);
        assert_eq!(game.current_turn, Stone::Black);
        assert!(!game.is_over());
        assert!(game.history.is_empty());
        assert!(Game::new(3, GameMode::PvP).is_err());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = pvp(15);
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.current_turn, Stone::White);
        game.play(Pos::new(7, 8)).unwrap();
        assert_eq!(game.current_turn, Stone::Black);
        assert_eq!(
            game.history,
            vec![(Pos::new(7, 7), Stone::Black), (Pos::new(7, 8), Stone::White)]
        );
        assert_eq!(game.last_move, Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut game = pvp(15);
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(
            game.play(Pos::new(7, 7)),
            Err(GameError::Board(BoardError::Occupied { row: 7, col: 7 }))
        );
        assert!(matches!(
            game.play(Pos::new(15, 0)),
            Err(GameError::Board(BoardError::OutOfBounds { .. }))
        ));
        // Failed moves don't pass the turn
        assert_eq!(game.current_turn, Stone::White);
    }

    #[test]
    fn test_win_records_line_and_ends_game() {
        let mut game = pvp(15);
        for c in 0..4 {
            game.play(Pos::new(0, c)).unwrap();
            game.play(Pos::new(5, c)).unwrap();
        }
        game.play(Pos::new(0, 4)).unwrap();

        let expected: Vec<Pos> = (0..5).map(|c| Pos::new(0, c)).collect();
        assert_eq!(
            game.outcome,
            Some(GameOutcome::Win {
                winner: Stone::Black,
                line: expected
            })
        );
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.play(Pos::new(9, 9)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_on_full_board() {
        let layout = [
            "XXOOX",
            "OOXXO",
            "XXOOX",
            "OOXXO",
            "XXOO.",
        ];
        let mut game = pvp(5);
        game.board = Board::from_rows(&layout).unwrap();
        game.current_turn = Stone::Black;
        game.play(Pos::new(4, 4)).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_set_mode_restarts() {
        let mut game = pvp(15);
        game.play(Pos::new(3, 3)).unwrap();
        game.set_mode(GameMode::PvE {
            ai_color: Stone::Black,
        });
        assert!(game.board.is_board_empty());
        assert_eq!(game.current_turn, Stone::Black);
        assert!(game.history.is_empty());
        assert!(game.is_ai_turn());
    }

    #[test]
    fn test_play_ai_respects_turn() {
        let engine = AIEngine::with_config(EngineConfig { parallel: false });
        let mut game = Game::new(15, GameMode::PvE { ai_color: Stone::White }).unwrap();
        assert!(matches!(
            game.play_ai(&engine),
            Err(GameError::NotAiTurn { .. })
        ));

        game.play(Pos::new(3, 4)).unwrap();
        let mv = game.play_ai(&engine).unwrap();
        assert_eq!(mv.pos, Pos::new(7, 7), "center reply to a lone stone");
        assert_eq!(game.board.get(mv.pos), Stone::White);
        assert_eq!(game.current_turn, Stone::Black);
    }

    #[test]
    fn test_self_play_terminates() {
        let engine = AIEngine::with_config(EngineConfig { parallel: false });
        let mut game = pvp(7);
        let mut moves = 0;
        while !game.is_over() {
            game.play_ai(&engine).unwrap();
            moves += 1;
            assert!(moves <= 49);
        }
        assert!(game.outcome.is_some());
    }

    #[test]
    fn test_winning_line_helper() {
        let mut board = Board::new(15).unwrap();
        for r in 2..7 {
            board.place_stone(Pos::new(r, r), Stone::White);
        }
        let line = winning_line(&board, Pos::new(4, 4)).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(2, 2));
        assert!(winning_line(&board, Pos::new(0, 0)).is_none());
        assert!(winning_line(&board, Pos::new(20, 0)).is_none());
    }

    #[test]
    fn test_random_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(5).unwrap();
        for _ in 0..25 {
            let pos = random_empty_cell(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
            board.place_stone(pos, Stone::Black);
        }
        assert!(random_empty_cell(&board, &mut rng).is_none());
    }
}
