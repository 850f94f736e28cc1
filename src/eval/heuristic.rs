//! Heuristic scoring of a single candidate cell
//!
//! Each empty cell is scored as if the mover played there:
//! - Immediate win (five or more): [`Tier::WIN`]
//! - Immediate block of an opponent five: [`Tier::BLOCK_WIN`]
//! - Otherwise an offense/defense blend weighted by game phase
//!
//! Heuristic totals are not bounded and can exceed the terminal scores;
//! [`CellScore::outranks`] compares the tier first.
//!
//! The board is never modified; the hypothetical stone lives in an
//! [`Overlay`].

use crate::board::{adjacent_run, run_pattern, Board, CellView, Overlay, Pos, Stone, DIRECTIONS};
use crate::rules::has_five_at_pos;

use super::analyzer::{analyze_cell, CellThreats};
use super::patterns::{
    blocking_weight, positional_run_score, scale_pct, DefenseScore, OffenseScore,
    PositionalScore, Tier,
};
use super::phase::GamePhase;

/// Which rule produced a cell's score, ordered weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreTier {
    /// Phase-weighted offense/defense blend
    Heuristic,
    /// The opponent would complete five here
    Block,
    /// The mover completes five here
    Win,
}

/// Score of one candidate cell with its components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScore {
    pub total: i64,
    pub tier: ScoreTier,
    /// Offensive component after the phase multiplier (0 for terminal tiers)
    pub offense: i64,
    pub defense: i64,
    /// Strategic term; only used for balanced middle-game cells
    pub strategic: i64,
}

impl CellScore {
    /// Strictly better: higher tier, or same tier and higher total
    #[inline]
    pub fn outranks(&self, other: &CellScore) -> bool {
        (self.tier, self.total) > (other.tier, other.total)
    }

    #[inline]
    fn terminal(tier: ScoreTier, total: i64) -> Self {
        Self {
            total,
            tier,
            offense: 0,
            defense: 0,
            strategic: 0,
        }
    }
}

/// Score `pos` for `player` on `board`.
///
/// `pos` must be empty on `board`. `phase` is passed in rather than derived
/// so a whole scan shares one classification of the position.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, player: Stone, phase: GamePhase) -> CellScore {
    let opponent = player.opponent();

    let mine = Overlay::new(board, pos, player);
    if has_five_at_pos(&mine, pos, player) {
        return CellScore::terminal(ScoreTier::Win, Tier::WIN);
    }

    let theirs = Overlay::new(board, pos, opponent);
    if has_five_at_pos(&theirs, pos, opponent) {
        return CellScore::terminal(ScoreTier::Block, Tier::BLOCK_WIN);
    }

    let my_threats = analyze_cell(&mine, pos, player);
    let their_threats = analyze_cell(&theirs, pos, opponent);

    let offense = offensive_score(board, pos, opponent, &my_threats, phase);
    let defense = defensive_score(board, pos, opponent, &their_threats);

    let (total, strategic) = match phase.blend(offense, defense) {
        Some(blended) => (blended, 0),
        None => {
            let strategic = strategic_score(&mine, pos, player);
            (offense + defense + strategic, strategic)
        }
    };

    CellScore {
        total,
        tier: ScoreTier::Heuristic,
        offense,
        defense,
        strategic,
    }
}

/// Value of the mover's own threats at the cell, plus closeness to the
/// opponent, scaled by phase.
fn offensive_score(
    board: &Board,
    pos: Pos,
    opponent: Stone,
    threats: &CellThreats,
    phase: GamePhase,
) -> i64 {
    let mut score = i64::from(threats.live_fours) * OffenseScore::LIVE_FOUR;
    score += match threats.double_threes() {
        0 => 0,
        1 => OffenseScore::DOUBLE_THREE,
        _ => OffenseScore::MULTI_DOUBLE_THREE,
    };
    score += i64::from(threats.live_threes) * OffenseScore::LIVE_THREE;
    score += i64::from(threats.fours) * OffenseScore::FOUR;
    score += proximity_bonus(board, pos, opponent);

    scale_pct(score, phase.offense_multiplier_pct())
}

/// Opponent stones in the box around `pos`, worth less the farther they are
fn proximity_bonus(board: &Board, pos: Pos, opponent: Stone) -> i64 {
    let radius = OffenseScore::PROXIMITY_RADIUS;
    let mut bonus = 0;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = pos.offset(dr, dc, 1);
            if board.stone_at(r, c) == Some(opponent) {
                let dist = i64::from(dr.abs() + dc.abs());
                bonus += OffenseScore::PROXIMITY / dist;
            }
        }
    }
    bonus
}

/// Value of denying the opponent this cell
fn defensive_score(board: &Board, pos: Pos, opponent: Stone, threats: &CellThreats) -> i64 {
    let mut score = i64::from(threats.live_fours) * DefenseScore::LIVE_FOUR;
    score += match threats.double_threes() {
        0 => 0,
        1 => DefenseScore::DOUBLE_THREE,
        _ => DefenseScore::MULTI_DOUBLE_THREE,
    };
    score += i64::from(threats.live_threes) * DefenseScore::LIVE_THREE;
    score += i64::from(threats.fours) * DefenseScore::FOUR;
    score += scale_pct(
        blocking_effectiveness(board, pos, opponent),
        DefenseScore::BLOCK_SCALE_PCT,
    );
    score += key_point_bonus(board, pos, opponent);
    score
}

/// Sum over directions of the weight for opponent stones in line with `pos`
fn blocking_effectiveness(board: &Board, pos: Pos, opponent: Stone) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&dir| blocking_weight(adjacent_run(board, pos, dir, opponent)))
        .sum()
}

fn key_point_bonus(board: &Board, pos: Pos, opponent: Stone) -> i64 {
    let central = pos.manhattan(board.center()) <= DefenseScore::KEY_POINT_CENTER_RADIUS;
    if central || is_intersection(board, pos, opponent) {
        DefenseScore::KEY_POINT
    } else {
        0
    }
}

/// `pos` touches opponent stones along at least two different lines
fn is_intersection(board: &Board, pos: Pos, opponent: Stone) -> bool {
    DIRECTIONS
        .iter()
        .filter(|&&dir| adjacent_run(board, pos, dir, opponent) > 0)
        .count()
        >= 2
}

/// Static evaluation of the cell once taken: center closeness plus the
/// positional value of each run through it.
#[allow(clippy::cast_possible_wrap)]
fn strategic_score<V: CellView + ?Sized>(view: &V, pos: Pos, player: Stone) -> i64 {
    // Doubled coordinates keep the center exact on even-sized boards
    let n = view.size() as i64;
    let r2 = 2 * i64::from(pos.row);
    let c2 = 2 * i64::from(pos.col);
    let center = (2 * n - (r2 - n).abs() - (c2 - n).abs()) * PositionalScore::CENTER_WEIGHT;

    let runs: i64 = DIRECTIONS
        .iter()
        .map(|&dir| positional_run_score(run_pattern(view, pos, dir, player)))
        .sum();

    center + runs
}
