//! Board shapes: coordinates, index mapping and neighbour directions.
//!
//! Each shape is a zero-sized marker type implementing [`Geometry`]. Cells are
//! stored in one flat array, and both shapes map coordinates onto it
//! layer-major:
//!
//! ```text
//! plane: index = row * 8 + col
//! cube:  index = z * 16 + y * 4 + x
//! ```
//!
//! Coordinates are signed so that a step off the edge is still representable;
//! [`Geometry::index_of`] is the single gate between coordinates and storage.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::board::Cell;
use crate::constants::{
    COLUMN_LETTERS, CUBE_DIRECTION_COUNT, CUBE_SIDE, CUBE_VOLUME, PLANE_DIRECTION_COUNT,
    PLANE_SIDE, PLANE_VOLUME,
};
use crate::error::ParseCoordError;

/// A board shape: how coordinates map to cell indices and which way lines run.
pub trait Geometry: Copy + fmt::Debug + Default + PartialEq + Eq + Hash + 'static {
    /// A position on the board, or a direction vector between positions.
    type Coord: Copy
        + fmt::Debug
        + fmt::Display
        + PartialEq
        + Eq
        + Hash
        + FromStr<Err = ParseCoordError>;

    /// Short lowercase name ("plane", "cube").
    const NAME: &'static str;
    /// Cells along one edge.
    const SIDE: usize;
    /// Total number of cells.
    const VOLUME: usize;
    /// Number of `SIDE x SIDE` layers the cells are split into.
    const LAYERS: usize;

    /// Every unit step to a neighbouring cell, excluding the zero vector.
    fn directions() -> &'static [Self::Coord];

    /// Whether `coord` names a cell on the board.
    fn in_bounds(coord: Self::Coord) -> bool;

    /// Map a coordinate to its cell index, or `None` when off the board.
    fn index_of(coord: Self::Coord) -> Option<usize>;

    /// Map a cell index back to its coordinate, or `None` when `index >= VOLUME`.
    fn coord_of(index: usize) -> Option<Self::Coord>;

    /// Translate `coord` by one step in direction `dir`. The result may be off the board.
    fn step(coord: Self::Coord, dir: Self::Coord) -> Self::Coord;

    /// Contents of `coord` in the starting position.
    fn initial_cell(coord: Self::Coord) -> Cell;
}

// =============================================================================
// Plane
// =============================================================================

/// The classic 8x8 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plane;

/// A square on the plane, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

static PLANE_DIRECTIONS: [Square; PLANE_DIRECTION_COUNT] = plane_directions();

const fn plane_directions() -> [Square; PLANE_DIRECTION_COUNT] {
    let mut out = [Square::new(0, 0); PLANE_DIRECTION_COUNT];
    let mut n = 0;
    let mut dr = -1;
    while dr <= 1 {
        let mut dc = -1;
        while dc <= 1 {
            if dr != 0 || dc != 0 {
                out[n] = Square::new(dr, dc);
                n += 1;
            }
            dc += 1;
        }
        dr += 1;
    }
    out
}

impl Geometry for Plane {
    type Coord = Square;

    const NAME: &'static str = "plane";
    const SIDE: usize = PLANE_SIDE;
    const VOLUME: usize = PLANE_VOLUME;
    const LAYERS: usize = 1;

    #[inline]
    fn directions() -> &'static [Square] {
        &PLANE_DIRECTIONS
    }

    #[inline]
    fn in_bounds(sq: Square) -> bool {
        let side = PLANE_SIDE as i32;
        (0..side).contains(&sq.row) && (0..side).contains(&sq.col)
    }

    #[inline]
    fn index_of(sq: Square) -> Option<usize> {
        Self::in_bounds(sq).then(|| sq.row as usize * PLANE_SIDE + sq.col as usize)
    }

    #[inline]
    fn coord_of(index: usize) -> Option<Square> {
        (index < PLANE_VOLUME)
            .then(|| Square::new((index / PLANE_SIDE) as i32, (index % PLANE_SIDE) as i32))
    }

    #[inline]
    fn step(sq: Square, dir: Square) -> Square {
        Square::new(sq.row + dir.row, sq.col + dir.col)
    }

    fn initial_cell(sq: Square) -> Cell {
        let lo = PLANE_SIDE as i32 / 2 - 1;
        let hi = lo + 1;
        match (sq.row, sq.col) {
            (r, c) if r == lo && c == lo => Cell::White,
            (r, c) if r == hi && c == hi => Cell::White,
            (r, c) if r == lo && c == hi => Cell::Black,
            (r, c) if r == hi && c == lo => Cell::Black,
            _ => Cell::Empty,
        }
    }
}

/// Column letter then 1-based row ("D3").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Plane::index_of(*self) {
            Some(_) => {
                let col = COLUMN_LETTERS.as_bytes()[self.col as usize] as char;
                write!(f, "{col}{}", self.row + 1)
            }
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Square {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let mut chars = s.trim().chars();
        let col = chars.next().map(|c| c.to_ascii_uppercase()).ok_or_else(err)?;
        let col = COLUMN_LETTERS[..PLANE_SIDE].find(col).ok_or_else(err)?;
        let row = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(err)?;

        if chars.next().is_some() || row == 0 || row as usize > PLANE_SIDE {
            return Err(err());
        }
        Ok(Square::new(row as i32 - 1, col as i32))
    }
}

// =============================================================================
// Cube
// =============================================================================

/// The 4x4x4 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cube;

/// A cell in the cube. `z` selects the layer, `y` the row, `x` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

static CUBE_DIRECTIONS: [Point; CUBE_DIRECTION_COUNT] = cube_directions();

const fn cube_directions() -> [Point; CUBE_DIRECTION_COUNT] {
    let mut out = [Point::new(0, 0, 0); CUBE_DIRECTION_COUNT];
    let mut n = 0;
    let mut dx = -1;
    while dx <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dz = -1;
            while dz <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    out[n] = Point::new(dx, dy, dz);
                    n += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    out
}

impl Geometry for Cube {
    type Coord = Point;

    const NAME: &'static str = "cube";
    const SIDE: usize = CUBE_SIDE;
    const VOLUME: usize = CUBE_VOLUME;
    const LAYERS: usize = CUBE_SIDE;

    #[inline]
    fn directions() -> &'static [Point] {
        &CUBE_DIRECTIONS
    }

    #[inline]
    fn in_bounds(p: Point) -> bool {
        let side = 0..CUBE_SIDE as i32;
        side.contains(&p.x) && side.contains(&p.y) && side.contains(&p.z)
    }

    #[inline]
    fn index_of(p: Point) -> Option<usize> {
        Self::in_bounds(p).then(|| {
            p.z as usize * CUBE_SIDE * CUBE_SIDE + p.y as usize * CUBE_SIDE + p.x as usize
        })
    }

    #[inline]
    fn coord_of(index: usize) -> Option<Point> {
        if index >= CUBE_VOLUME {
            return None;
        }
        let plane = CUBE_SIDE * CUBE_SIDE;
        let rem = index % plane;
        Some(Point::new(
            (rem % CUBE_SIDE) as i32,
            (rem / CUBE_SIDE) as i32,
            (index / plane) as i32,
        ))
    }

    #[inline]
    fn step(p: Point, dir: Point) -> Point {
        Point::new(p.x + dir.x, p.y + dir.y, p.z + dir.z)
    }

    /// The central 2x2x2 block, coloured by the parity of `x + y + z`.
    fn initial_cell(p: Point) -> Cell {
        let centre = 1..=2;
        if !(centre.contains(&p.x) && centre.contains(&p.y) && centre.contains(&p.z)) {
            return Cell::Empty;
        }
        if (p.x + p.y + p.z) % 2 == 0 {
            Cell::White
        } else {
            Cell::Black
        }
    }
}

/// Column letter for `x`, then 1-based `y` and `z` ("B23").
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Cube::index_of(*self) {
            Some(_) => {
                let col = COLUMN_LETTERS.as_bytes()[self.x as usize] as char;
                write!(f, "{col}{}{}", self.y + 1, self.z + 1)
            }
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl FromStr for Point {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let mut chars = s.trim().chars();
        let x = chars.next().map(|c| c.to_ascii_uppercase()).ok_or_else(err)?;
        let x = COLUMN_LETTERS[..CUBE_SIDE].find(x).ok_or_else(err)?;

        let mut digit = || {
            chars
                .next()
                .and_then(|c| c.to_digit(10))
                .filter(|&d| d >= 1 && d as usize <= CUBE_SIDE)
                .map(|d| d as i32 - 1)
        };
        let y = digit().ok_or_else(err)?;
        let z = digit().ok_or_else(err)?;

        if chars.next().is_some() {
            return Err(err());
        }
        Ok(Point::new(x as i32, y, z))
    }
}
