//! Turn order, passes and game end.
//!
//! [`GameState`] is the snapshot a front end holds: the board, whose turn it
//! is, that player's legal moves and a status line. Playing a move returns a
//! new snapshot and leaves the old one intact.
//!
//! After every move the turn goes to the opponent if they can place. If they
//! cannot, the mover keeps the turn and the status reports a pass. If neither
//! side can place, or the board is full, the game is finished.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Score};
use crate::error::MoveError;
use crate::geometry::{Cube, Geometry, Plane};
use crate::rules::{Move, apply_move, legal_moves};

/// What the front end should tell the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Nothing to report.
    InProgress,
    /// The given player had no legal move and was skipped.
    Passed(Player),
    /// The game is over with the given final counts.
    Finished(Score),
}

/// The status line: `""`, `"Pass"`, `"Black wins 6-0"`, `"White wins 5-3"` or `"Draw 4-4"`.
///
/// The winner's count comes first.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => Ok(()),
            Status::Passed(_) => f.write_str("Pass"),
            Status::Finished(score) => match score.leader() {
                Some(winner) => write!(
                    f,
                    "{winner} wins {}-{}",
                    score.of(winner),
                    score.of(winner.opponent())
                ),
                None => write!(f, "Draw {}-{}", score.black, score.white),
            },
        }
    }
}

/// An immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState<G: Geometry> {
    board: Board<G>,
    current: Player,
    legal: Vec<Move<G>>,
    status: Status,
}

/// A game on the 8x8 board.
pub type PlaneGame = GameState<Plane>;

/// A game on the 4x4x4 board.
pub type CubeGame = GameState<Cube>;

impl<G: Geometry> Default for GameState<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Geometry> GameState<G> {
    /// The starting position with Black to move.
    pub fn new() -> Self {
        Self::settle(Board::initial(), Player::Black)
    }

    /// Start from an arbitrary position with `player` nominally to move.
    ///
    /// The same pass and end rules as after a move are applied, so if
    /// `player` is blocked the turn may go straight to the opponent.
    pub fn from_position(board: Board<G>, player: Player) -> Self {
        Self::settle(board, player)
    }

    /// A fresh game in the starting position.
    pub fn restart(&self) -> Self {
        Self::new()
    }

    /// Hand the turn to `next` if they can place, otherwise to the other side,
    /// and finish the game when nobody can.
    fn settle(board: Board<G>, next: Player) -> Self {
        let mut current = next;
        let mut status = Status::InProgress;
        let mut legal = legal_moves(&board, current);

        if legal.is_empty() {
            let other = legal_moves(&board, current.opponent());
            if !other.is_empty() {
                debug!(passer = %current, "forced pass");
                status = Status::Passed(current);
                current = current.opponent();
                legal = other;
            }
        }

        if board.is_full() || legal.is_empty() {
            let score = board.score();
            status = Status::Finished(score);
            legal.clear();
            info!(
                black = score.black,
                white = score.white,
                "game over: {}",
                status
            );
        }

        Self {
            board,
            current,
            legal,
            status,
        }
    }

    /// Play the cell at `index` for the current player.
    pub fn play(&self, index: usize) -> Result<Self, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let coord = G::coord_of(index)
            .ok_or_else(|| MoveError::OutOfBounds(format!("index {index}")))?;
        self.play_at(coord)
    }

    /// Play at `coord` for the current player.
    ///
    /// # Errors
    /// - [`MoveError::GameOver`] once the game has finished, whatever the move
    /// - [`MoveError::OutOfBounds`], [`MoveError::Occupied`] or
    ///   [`MoveError::NoCaptures`] when the placement is not legal
    #[instrument(level = "debug", skip(self), fields(player = %self.current))]
    pub fn play_at(&self, coord: G::Coord) -> Result<Self, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        match apply_move(&self.board, self.current, coord) {
            Ok(board) => Ok(Self::settle(board, self.current.opponent())),
            Err(err) => {
                debug!(%err, "move rejected");
                Err(err)
            }
        }
    }

    #[inline]
    pub fn board(&self) -> &Board<G> {
        &self.board
    }

    /// The player whose turn it is. Meaningless once the game is finished.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Legal moves for the current player, ascending by index. Empty when finished.
    #[inline]
    pub fn legal_moves(&self) -> &[Move<G>] {
        &self.legal
    }

    /// Cell indices of the legal moves.
    pub fn legal_indices(&self) -> Vec<usize> {
        self.legal.iter().map(|m| m.index).collect()
    }

    /// Whether `index` is one of the current legal moves.
    pub fn is_legal(&self, index: usize) -> bool {
        self.legal.binary_search_by_key(&index, |m| m.index).is_ok()
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The status line shown to players.
    pub fn message(&self) -> String {
        self.status.to_string()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }
}
