//! Constants for board dimensions and stone encodings.
//!
//! Two board shapes share one engine:
//! - the plane: the classic 8x8 board with 8 neighbour directions
//! - the cube: a 4x4x4 board with 26 neighbour directions
//!
//! Both happen to hold 64 cells.

// =============================================================================
// Plane (8x8)
// =============================================================================

/// Side length of the plane board.
pub const PLANE_SIDE: usize = 8;

/// Number of cells on the plane board.
pub const PLANE_VOLUME: usize = PLANE_SIDE * PLANE_SIDE;

/// Neighbour directions on the plane: every (dr, dc) in {-1,0,1}^2 except (0,0).
pub const PLANE_DIRECTION_COUNT: usize = 8;

// =============================================================================
// Cube (4x4x4)
// =============================================================================

/// Side length of the cube board.
pub const CUBE_SIDE: usize = 4;

/// Number of cells on the cube board.
pub const CUBE_VOLUME: usize = CUBE_SIDE * CUBE_SIDE * CUBE_SIDE;

/// Neighbour directions in the cube: every (dx, dy, dz) in {-1,0,1}^3 except (0,0,0).
pub const CUBE_DIRECTION_COUNT: usize = 26;

// =============================================================================
// Numeric Stone Encoding
// =============================================================================

/// Numeric value of a black disc.
pub const STONE_BLACK: i8 = 1;

/// Numeric value of a white disc.
pub const STONE_WHITE: i8 = -1;

/// Numeric value of an empty cell.
pub const STONE_EMPTY: i8 = 0;

// =============================================================================
// Text Rendering
// =============================================================================

/// Glyph for a black disc.
pub const GLYPH_BLACK: char = '#';

/// Glyph for a white disc.
pub const GLYPH_WHITE: char = 'O';

/// Glyph for an empty cell.
pub const GLYPH_EMPTY: char = '.';

/// Column letters used by the text notation.
pub const COLUMN_LETTERS: &str = "ABCDEFGH";

// =============================================================================
// Engine Identity
// =============================================================================

/// Name reported by the text protocol.
pub const ENGINE_NAME: &str = "reversi-cube";
