//! Reversi-Cube: board-state and move-generation core for Reversi on an 8x8
//! plane and a 4x4x4 cube.
//!
//! Rendering and input handling live elsewhere. A front end holds a
//! [`game::GameState`], shows its board and legal moves, and asks it for the
//! next state when the player picks a cell.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and stone encodings
//! - [`geometry`] - Coordinates, index mapping and neighbour directions
//! - [`board`] - Cells, players and the immutable board value
//! - [`rules`] - Capture computation, legal moves, move application, game end
//! - [`game`] - Turn order, passes and the status line
//! - [`error`] - Rejected requests
//! - [`protocol`] - Text protocol front end
//! - [`playout`] - Random self-play and perft counting
//!
//! ## Example
//!
//! ```
//! use reversi_cube::game::CubeGame;
//!
//! let game = CubeGame::new();
//! let first = game.legal_moves()[0].index;
//! let next = game.play(first).unwrap();
//!
//! assert_eq!(next.score().black, 6);
//! assert_eq!(game.score().black, 4);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod geometry;
pub mod playout;
pub mod protocol;
pub mod rules;
