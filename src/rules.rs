//! Move generation and game-end rules.
//!
//! All functions here are pure: they read a [`Board`] and return derived data
//! or a new board. Nothing is cached between calls.
//!
//! A placement captures along every direction independently. Walking outward
//! from the origin, opponent discs are collected until the walk hits:
//! - the player's own disc: the collected discs are captured
//! - an empty cell or the edge: the collected discs are discarded

use tracing::trace;

use crate::board::{Board, Cell, Player};
use crate::error::MoveError;
use crate::geometry::Geometry;

/// A legal placement and the cells it would capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move<G: Geometry> {
    /// Where the disc is placed.
    pub coord: G::Coord,
    /// Cell index of `coord`.
    pub index: usize,
    /// Indices of opponent discs that flip, ascending and never empty.
    pub captures: Vec<usize>,
}

/// Indices of the opponent discs `player` would capture by placing at `origin`.
///
/// Returns an empty list when `origin` is off the board, occupied, or captures
/// nothing; otherwise the list is ascending and duplicate-free.
pub fn compute_captures<G: Geometry>(
    board: &Board<G>,
    player: Player,
    origin: G::Coord,
) -> Vec<usize> {
    if board.get(origin) != Some(Cell::Empty) {
        return Vec::new();
    }

    let own = player.disc();
    let theirs = player.opponent().disc();
    let mut captures = Vec::new();
    let mut path = Vec::new();

    for &dir in G::directions() {
        path.clear();
        let mut cursor = G::step(origin, dir);

        while let Some(index) = G::index_of(cursor) {
            let cell = board.cells()[index];
            if cell == theirs {
                path.push(index);
            } else {
                if cell == own {
                    captures.extend_from_slice(&path);
                }
                break;
            }
            cursor = G::step(cursor, dir);
        }
    }

    // Lines from one origin never overlap, so sorting is all that is needed.
    captures.sort_unstable();
    captures
}

/// Every legal placement for `player`, in ascending index order.
pub fn legal_moves<G: Geometry>(board: &Board<G>, player: Player) -> Vec<Move<G>> {
    (0..G::VOLUME)
        .filter(|&index| board.cells()[index].is_empty())
        .filter_map(|index| {
            let coord = G::coord_of(index)?;
            let captures = compute_captures(board, player, coord);
            (!captures.is_empty()).then_some(Move {
                coord,
                index,
                captures,
            })
        })
        .collect()
}

/// Whether `player` has at least one legal placement.
pub fn has_any_move<G: Geometry>(board: &Board<G>, player: Player) -> bool {
    (0..G::VOLUME).any(|index| {
        board.cells()[index].is_empty()
            && G::coord_of(index)
                .is_some_and(|coord| !compute_captures(board, player, coord).is_empty())
    })
}

/// Place a disc for `player` at `origin`, returning the resulting board.
///
/// The input board is left untouched.
///
/// # Errors
/// - [`MoveError::OutOfBounds`] if `origin` is off the board
/// - [`MoveError::Occupied`] if `origin` already holds a disc
/// - [`MoveError::NoCaptures`] if the placement would capture nothing
pub fn apply_move<G: Geometry>(
    board: &Board<G>,
    player: Player,
    origin: G::Coord,
) -> Result<Board<G>, MoveError> {
    let index = G::index_of(origin).ok_or_else(|| MoveError::OutOfBounds(origin.to_string()))?;
    if !board.cells()[index].is_empty() {
        return Err(MoveError::Occupied(index));
    }

    let captures = compute_captures(board, player, origin);
    if captures.is_empty() {
        return Err(MoveError::NoCaptures(index));
    }

    trace!(%player, %origin, ?captures, "applying move");
    Ok(board.with_placement(index, &captures, player.disc()))
}

/// Whether the game has ended: the board is full, or neither side can place.
pub fn is_game_over<G: Geometry>(board: &Board<G>) -> bool {
    board.is_full()
        || (!has_any_move(board, Player::Black) && !has_any_move(board, Player::White))
}
