use crate::core::grid::GridTable;
use crate::core::region::BoundingRegion;

/// Number of subdivision levels, and therefore symbols, in a DIGIPIN.
pub const CODE_LENGTH: usize = 10;

/// Cells per axis at every level.
pub const GRID_SIZE: usize = 4;

/// Display separator. Carries no meaning and is stripped before decoding.
pub const SEPARATOR: char = '-';

/// Symbol counts after which a separator is rendered (`XXX-XXX-XXXX`).
pub const SEPARATOR_POSITIONS: [usize; 2] = [3, 6];

/// Decimal places kept on decoded coordinates.
pub const DECIMAL_PLACES: i32 = 6;

/// Bounding region [min_lat, max_lat, min_lon, max_lon] covering the Indian subcontinent.
pub const INDIA_BOUNDS: BoundingRegion = BoundingRegion::from_raw(2.5, 38.5, 63.5, 99.5);

/// Symbol table, row 0 northernmost and column 0 westernmost.
pub const DIGIPIN_GRID: GridTable = GridTable::from_raw([
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
]);
