//! Random self-play and move-tree counting.
//!
//! A playout plays uniformly random legal moves from the starting position
//! until the game ends. It exercises the rules end to end and backs the demo
//! command; it makes no attempt to play well.
//!
//! "Perft" counts the leaves of the move tree to a fixed depth, which pins
//! down move generation exactly. See: http://www.aartbik.com/MISC/reversi.html

use tracing::debug;

use crate::board::{Board, Player};
use crate::game::{GameState, Status};
use crate::geometry::Geometry;
use crate::rules::{apply_move, legal_moves};

/// The outcome of one random playout.
#[derive(Clone, Debug)]
pub struct PlayoutRecord<G: Geometry> {
    /// The finished game.
    pub final_state: GameState<G>,
    /// Cell indices played, in order.
    pub moves: Vec<usize>,
    /// Number of forced passes along the way.
    pub passes: usize,
}

/// Play random legal moves from the starting position until the game ends.
pub fn random_game<G: Geometry>(rng: &mut fastrand::Rng) -> PlayoutRecord<G> {
    let mut game = GameState::<G>::new();
    let mut moves = Vec::with_capacity(G::VOLUME);
    let mut passes = 0;

    while !game.is_game_over() {
        let legal = game.legal_moves();
        let pick = legal[rng.usize(..legal.len())].index;

        // A move from the legal list is always accepted.
        let Ok(next) = game.play(pick) else {
            break;
        };
        game = next;
        moves.push(pick);

        if let Status::Passed(_) = game.status() {
            passes += 1;
        }
    }

    debug!(
        variant = G::NAME,
        moves = moves.len(),
        passes,
        "playout finished: {}",
        game.message()
    );

    PlayoutRecord {
        final_state: game,
        moves,
        passes,
    }
}

/// Count the leaves of the move tree `depth` plies below the starting position.
pub fn run_perft<G: Geometry>(depth: u32) -> u64 {
    perft(&Board::<G>::initial(), Player::Black, depth)
}

/// Count the leaves of the move tree `depth` plies below `board` with `player` to move.
///
/// A blocked player passes, which uses up a ply. A second consecutive pass
/// ends the game and counts as a leaf.
pub fn perft<G: Geometry>(board: &Board<G>, player: Player, depth: u32) -> u64 {
    leaves_below(board, player, depth, false)
}

fn leaves_below<G: Geometry>(board: &Board<G>, player: Player, depth: u32, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }
        return leaves_below(board, player.opponent(), depth - 1, true);
    }

    moves
        .iter()
        .filter_map(|mv| apply_move(board, player, mv.coord).ok())
        .map(|next| leaves_below(&next, player.opponent(), depth - 1, false))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Cube, Plane};

    #[test]
    fn test_perft_plane() {
        assert_eq!(run_perft::<Plane>(1), 4);
        assert_eq!(run_perft::<Plane>(2), 12);
        assert_eq!(run_perft::<Plane>(3), 56);
        assert_eq!(run_perft::<Plane>(4), 244);
    }

    #[test]
    fn test_perft_cube() {
        assert_eq!(run_perft::<Cube>(1), 16);
        assert_eq!(run_perft::<Cube>(2), 240);
        assert_eq!(run_perft::<Cube>(3), 3948);
    }

    #[test]
    fn test_perft_blocked_position() {
        // Neither side can move: one pass, then the game ends.
        let board = Board::<Plane>::new();
        assert_eq!(perft(&board, Player::Black, 5), 1);
    }

    #[test]
    fn test_random_game_finishes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let record = random_game::<Cube>(&mut rng);
        let state = &record.final_state;

        assert!(state.is_game_over());
        assert!(state.legal_moves().is_empty());
        assert!(record.moves.len() <= 56);
        assert_eq!(state.score().empty, 56 - record.moves.len());
    }

    #[test]
    fn test_random_game_is_reproducible() {
        let a = random_game::<Plane>(&mut fastrand::Rng::with_seed(42));
        let b = random_game::<Plane>(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.final_state, b.final_state);
    }
}
