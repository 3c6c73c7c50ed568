//! Board storage: cells, players and the immutable [`Board`] value.
//!
//! A board is a flat, fixed-length sequence of cells addressed through its
//! [`Geometry`]. Boards are values: every "change" builds a new board and the
//! original stays valid, so a renderer holding an older board never sees a
//! half-applied move.

use std::fmt;
use std::marker::PhantomData;

use crate::constants::{
    GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, STONE_BLACK, STONE_EMPTY, STONE_WHITE,
};
use crate::error::BoardError;
use crate::geometry::{Cube, Geometry, Plane};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The disc this player places.
    #[inline]
    pub fn disc(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Contents of a single cell.
///
/// The discriminants are the numeric encoding: black `1`, white `-1`, empty `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Cell {
    White = STONE_WHITE,
    #[default]
    Empty = STONE_EMPTY,
    Black = STONE_BLACK,
}

impl Cell {
    /// Numeric value of this cell.
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Decode a numeric value, or `None` if it is not -1, 0 or 1.
    #[inline]
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            STONE_BLACK => Some(Cell::Black),
            STONE_WHITE => Some(Cell::White),
            STONE_EMPTY => Some(Cell::Empty),
            _ => None,
        }
    }

    /// The player owning this disc, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn glyph(self) -> char {
        match self {
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
            Cell::Empty => GLYPH_EMPTY,
        }
    }
}

/// Disc counts for a board. The three fields always sum to the board volume.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
    pub empty: usize,
}

impl Score {
    /// Discs held by `player`.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The player with more discs, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// An immutable board of `G::VOLUME` cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board<G: Geometry> {
    cells: Vec<Cell>,
    _geometry: PhantomData<G>,
}

/// The 8x8 board.
pub type PlaneBoard = Board<Plane>;

/// The 4x4x4 board.
pub type CubeBoard = Board<Cube>;

impl<G: Geometry> Default for Board<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Geometry> Board<G> {
    /// A board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; G::VOLUME],
            _geometry: PhantomData,
        }
    }

    /// The starting position for this geometry.
    pub fn initial() -> Self {
        let cells = (0..G::VOLUME)
            .map(|index| G::coord_of(index).map_or(Cell::Empty, G::initial_cell))
            .collect();
        Self {
            cells,
            _geometry: PhantomData,
        }
    }

    /// Build a board from cells in index order.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() != G::VOLUME {
            return Err(BoardError::WrongLength {
                expected: G::VOLUME,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            _geometry: PhantomData,
        })
    }

    /// Build a board from numeric cell values (-1, 0, 1) in index order.
    pub fn from_values(values: &[i8]) -> Result<Self, BoardError> {
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Cell::from_value(value).ok_or(BoardError::InvalidValue { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All cells as numeric values in index order.
    pub fn values(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Contents at `coord`, or `None` when it is off the board.
    #[inline]
    pub fn get(&self, coord: G::Coord) -> Option<Cell> {
        G::index_of(coord).map(|index| self.cells[index])
    }

    /// Contents at `index`, or `None` when it is out of range.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// A copy of this board with `coord` set to `cell`.
    /// Returns `None` when `coord` is off the board.
    pub fn with_cell(&self, coord: G::Coord, cell: Cell) -> Option<Self> {
        let index = G::index_of(coord)?;
        let mut next = self.clone();
        next.cells[index] = cell;
        Some(next)
    }

    /// A copy of this board with `origin` and every index in `captures` set to `disc`.
    /// Callers guarantee all indices are in range.
    pub(crate) fn with_placement(&self, origin: usize, captures: &[usize], disc: Cell) -> Self {
        let mut next = self.clone();
        next.cells[origin] = disc;
        for &index in captures {
            next.cells[index] = disc;
        }
        next
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count each kind of cell in a single pass.
    pub fn score(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut s, cell| {
            match cell {
                Cell::Black => s.black += 1,
                Cell::White => s.white += 1,
                Cell::Empty => s.empty += 1,
            }
            s
        })
    }
}

impl<G: Geometry> fmt::Debug for Board<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("geometry", &G::NAME)
            .field("values", &self.values())
            .finish()
    }
}

/// One grid per layer, rows top to bottom. Multi-layer boards label each layer.
impl<G: Geometry> fmt::Display for Board<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = crate::constants::COLUMN_LETTERS
            .chars()
            .take(G::SIDE)
            .flat_map(|c| [' ', c])
            .collect();

        for (layer, cells) in self.cells.chunks(G::SIDE * G::SIDE).enumerate() {
            if G::LAYERS > 1 {
                writeln!(f, "layer {}", layer + 1)?;
            }
            writeln!(f, " {header}")?;
            for (row, line) in cells.chunks(G::SIDE).enumerate() {
                write!(f, "{}", row + 1)?;
                for cell in line {
                    write!(f, " {}", cell.glyph())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
