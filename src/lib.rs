//! Wuziqi (Gomoku) move-selection engine
//!
//! A one-ply heuristic AI for free-style five-in-a-row:
//! - Square board, 5x5 up to 19x19 (15x15 by default)
//! - Black moves first, five or more in a row wins
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards, line scanning and a
//!   single-cell overlay for hypothetical placements
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Threat analysis, weights and the per-cell composite score
//! - [`engine`]: Move selection over all empty cells
//! - [`game`]: Game session for players and the engine
//! - [`config`]: YAML configuration
//!
//! # Quick Start
//!
//! ```
//! use wuziqi::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new(15).unwrap();
//! let engine = AIEngine::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(mv) = engine.select_move(&board, Stone::White) {
//!     board.place_stone(mv.pos, Stone::White);
//!     println!("AI plays at ({}, {})", mv.pos.row, mv.pos.col);
//! }
//! ```
//!
//! # Selection Priority
//!
//! 1. Opening book (center)
//! 2. Last empty cell
//! 3. Immediate winning move (100000)
//! 4. Block of the opponent's five (50000)
//! 5. Phase-weighted offense/defense heuristic

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, CellView, Overlay, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{Config, EngineConfig, SelfPlayConfig};
pub use engine::{AIEngine, Decision, Move, MoveResult};
pub use error::{BoardError, ConfigError, GameError};
pub use eval::{score_cell, CellScore, GamePhase, ScoreTier};
pub use game::{random_empty_cell, winning_line, Game, GameMode, GameOutcome};
pub use rules::{check_winner, has_five_at_pos};
