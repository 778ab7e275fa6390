use crate::core::constants::GRID_SIZE;
use crate::util::error::DigipinError;

const LAST: i64 = GRID_SIZE as i64 - 1;

/// A cell of the 4x4 grid. Row 0 is the northern band, column 0 the western band.
///
/// Both indices are always in `0..4`, so table lookups through a position never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    /// Returns `None` when either index is outside `0..4`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Clamps both indices into `0..4`.
    ///
    /// A coordinate on the upper edge of a region computes index 4 (or a
    /// negative row); clamping keeps it in the outermost band.
    pub fn clamped(row: i64, col: i64) -> Self {
        Self {
            row: row.clamp(0, LAST) as u8,
            col: col.clamp(0, LAST) as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }
}

/// Fixed bidirectional mapping between grid positions and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTable {
    symbols: [[char; GRID_SIZE]; GRID_SIZE],
}

impl GridTable {
    pub(crate) const fn from_raw(symbols: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { symbols }
    }

    /// Symbol for a grid position.
    pub fn symbol_at(&self, position: GridPosition) -> char {
        self.symbols[position.row()][position.col()]
    }

    /// Position of `symbol` in the table.
    ///
    /// Matching is case-sensitive; the display separator is not a symbol.
    pub fn locate(&self, symbol: char) -> Result<GridPosition, DigipinError> {
        self.symbols
            .iter()
            .enumerate()
            .find_map(|(row, symbols)| {
                symbols
                    .iter()
                    .position(|&s| s == symbol)
                    .and_then(|col| GridPosition::new(row, col))
            })
            .ok_or(DigipinError::InvalidSymbol(symbol))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.locate(symbol).is_ok()
    }

    /// All symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = char> {
        self.symbols.iter().flatten().copied()
    }
}
