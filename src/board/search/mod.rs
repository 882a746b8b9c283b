//! Fixed-depth game tree search.
//!
//! Two interchangeable strategies walk the same tree through
//! `apply`/`unmove` on the caller's position:
//! - Minimax
//! - Alpha-beta (fail-hard), which returns the same best move and score
//!
//! Both score leaves with the static evaluation in [`eval`], from the
//! point of view of the side to move at the root. Among equally scored
//! root moves the first in generation order wins.

mod alphabeta;
mod constants;
pub mod eval;
mod minimax;
mod params;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::SearchError;
use super::{Color, Move, MoveGenerator, Position};
pub use constants::{INFINITY, MATERIAL_SCALE, MATE_SCORE, MOBILITY_WEIGHT};
pub use params::{SearchParams, SearchStrategy};

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best root move; `None` at depth 0 or when the root has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` (or the static evaluation) for the root side
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// State shared by one search invocation.
pub(crate) struct SearchContext<'a> {
    position: &'a mut Position,
    generator: MoveGenerator,
    root: Color,
    nodes: u64,
}

/// Search `position` to `params.depth` plies and return the best move.
///
/// The position is explored in place and left exactly as it was passed in.
///
/// # Errors
/// Returns `SearchError::InvalidDepth` for a negative depth.
pub fn best_move(position: &mut Position, params: &SearchParams) -> Result<SearchResult, SearchError> {
    if params.depth < 0 {
        return Err(SearchError::InvalidDepth {
            depth: params.depth,
        });
    }

    let root = position.side_to_move();
    let mut ctx = SearchContext {
        position,
        generator: MoveGenerator::new(),
        root,
        nodes: 1,
    };

    let root_moves = ctx.generator.generate(ctx.position);
    if params.depth == 0 || root_moves.is_empty() {
        let score = eval::evaluate(ctx.position, &mut ctx.generator, root);
        debug!("static evaluation {score} for {root}");
        return Ok(SearchResult {
            best_move: None,
            score,
            nodes: ctx.nodes,
        });
    }

    let mut best: Option<Move> = None;
    let mut best_score = -INFINITY;
    for &mv in root_moves.iter() {
        ctx.position.apply(mv);
        let score = match params.strategy {
            SearchStrategy::Minimax => ctx.minimax(params.depth - 1, false),
            SearchStrategy::AlphaBeta => ctx.alpha_beta(params.depth - 1, best_score, INFINITY, false),
        };
        ctx.position.unmove();

        trace!("{mv}: {score}");
        if best.is_none() || score > best_score {
            best = Some(mv);
            best_score = score;
        }
    }

    debug!(
        "{:?} depth {}: best {} score {} nodes {}",
        params.strategy,
        params.depth,
        best.map_or_else(|| "-".to_string(), |mv| mv.to_string()),
        best_score,
        ctx.nodes
    );

    Ok(SearchResult {
        best_move: best,
        score: best_score,
        nodes: ctx.nodes,
    })
}

/// A uniformly random legal move, `None` when the side to move has none.
pub fn random_move<R: Rng + ?Sized>(position: &Position, rng: &mut R) -> Option<Move> {
    position.legal_moves().as_slice().choose(rng).copied()
}
