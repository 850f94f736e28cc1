//! Evaluation module for Wuziqi move selection
//!
//! - [`analyzer`]: threat categories at one cell (live two/three/four,
//!   fours, double-three, five)
//! - [`heuristic`]: composite score of one candidate cell
//! - [`patterns`]: every weight and tier, in one table
//! - [`phase`]: early/mid/late classification and offense/defense blend
//! - [`tally`]: position-wide threat diagnostics

pub mod analyzer;
pub mod heuristic;
pub mod patterns;
pub mod phase;
pub mod tally;

pub use analyzer::{analyze_cell, CellThreats};
pub use heuristic::{score_cell, CellScore, ScoreTier};
pub use patterns::{DefenseScore, OffenseScore, PositionalScore, Tier};
pub use phase::GamePhase;
pub use tally::{PositionReport, ThreatTally};
