//! Board storage: an N×N grid of cells.
//!
//! ## Cell Encoding
//!
//! | Cell | Code |
//! |---|---|
//! | `Empty` | 0 |
//! | `Stone(Player::One)` | 1 |
//! | `Stone(Player::Two)` | 2 |
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board to
//! produce the next snapshot shares structure with the previous one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{validate_board_size, GameConfig};
use super::error::ConfigError;
use super::player::Player;

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    /// Numeric code (0 empty, 1 or 2 for a stone).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(p) => p.code(),
        }
    }

    /// Parse a numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            _ => match Player::from_code(code) {
                Some(p) => Some(Cell::Stone(p)),
                None => None,
            },
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Square game board.
///
/// The size is fixed at construction. `get` and `set` take an in-range
/// `Coord`; use `coord` to bounds-check raw input first.
///
/// Deserialization checks the size range and the cell count, so a loaded
/// board upholds the same invariants as a constructed one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ConfigError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        validate_board_size(repr.size)?;
        let expected = repr.size * repr.size;
        if repr.cells.len() != expected {
            return Err(ConfigError::CellCount {
                len: repr.cells.len(),
                expected,
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create an empty N×N board.
    ///
    /// Use `from_config` to get an error instead of a panic.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `RUN_LENGTH..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        if let Err(err) = validate_board_size(size) {
            panic!("{err}");
        }
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Create an empty board sized by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.board_size))
    }

    /// Build a board from rows of numeric cell codes.
    ///
    /// The grid must be square, between `RUN_LENGTH` and `MAX_BOARD_SIZE`
    /// cells wide, and hold only codes 0, 1 and 2.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let size = rows.len();
        validate_board_size(size)?;

        let mut cells = Vector::new();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(ConfigError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &code) in values.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(ConfigError::CellCode { code, row, col })?;
                cells.push_back(cell);
            }
        }

        Ok(Self { size, cells })
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-check signed input, returning the coordinate if it is on the board.
    #[must_use]
    pub fn coord(&self, row: i64, col: i64) -> Option<Coord> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;
        Some(Coord::new(row, col))
    }

    /// Step `steps` times along `(d_row, d_col)` from `from`.
    ///
    /// Returns `None` once the walk leaves the board; there is no wraparound.
    #[must_use]
    pub fn offset(&self, from: Coord, d_row: isize, d_col: isize, steps: usize) -> Option<Coord> {
        let steps = isize::try_from(steps).ok()?;
        let row = from.row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = from.col.checked_add_signed(d_col.checked_mul(steps)?)?;
        (row < self.size && col < self.size).then_some(Coord::new(row, col))
    }

    /// Get the cell at an in-range coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Get the cell at a coordinate, or `None` if it is off the board.
    #[must_use]
    pub fn try_get(&self, at: Coord) -> Option<Cell> {
        if at.row < self.size && at.col < self.size {
            Some(self.get(at))
        } else {
            None
        }
    }

    /// Overwrite the cell at an in-range coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the board.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        let index = self.index(at);
        self.cells.set(index, cell);
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Iterate over (coordinate, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / size, i % size), cell))
    }

    /// Numeric codes, one `Vec` per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let mut rows = Vec::with_capacity(self.size);
        for row in 0..self.size {
            rows.push(
                (0..self.size)
                    .map(|col| self.get(Coord::new(row, col)).code())
                    .collect(),
            );
        }
        rows
    }

    fn index(&self, at: Coord) -> usize {
        assert!(
            at.row < self.size && at.col < self.size,
            "Coordinate {at} outside {0}x{0} board",
            self.size
        );
        at.row * self.size + at.col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_BOARD_SIZE)
    }
}

/// Rows of space-separated cell codes.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(Coord::new(row, col)).code())?;
            }
        }
        Ok(())
    }
}
