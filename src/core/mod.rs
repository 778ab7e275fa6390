pub mod code;
pub mod codec;
pub mod constants;
pub mod grid;
pub mod region;

pub use code::DigipinCode;
pub use codec::{DigipinCodec, LevelStep, decode, encode};
pub use constants::{
    CODE_LENGTH, DECIMAL_PLACES, DIGIPIN_GRID, GRID_SIZE, INDIA_BOUNDS, SEPARATOR,
    SEPARATOR_POSITIONS,
};
pub use grid::{GridPosition, GridTable};
pub use region::BoundingRegion;
