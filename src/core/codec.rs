use crate::core::code::DigipinCode;
use crate::core::constants::{CODE_LENGTH, DECIMAL_PLACES, DIGIPIN_GRID, INDIA_BOUNDS};
use crate::core::grid::{GridPosition, GridTable};
use crate::core::region::BoundingRegion;
use crate::util::coord::round_to;
use crate::util::error::DigipinError;

/// One subdivision level: the symbol chosen and the region it narrows to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStep {
    /// 1-based level number.
    pub level: usize,
    pub symbol: char,
    pub position: GridPosition,
    /// Region after narrowing to `position`.
    pub region: BoundingRegion,
}

/// Encoder and decoder over a fixed bounding region and grid table.
///
/// The region is part of the codec, never a per-call argument, so a code is
/// only meaningful together with the codec that produced it. `Default` is the
/// DIGIPIN region covering India.
///
/// # Example
/// ```
/// use digipin::DigipinCodec;
///
/// # fn main() -> Result<(), digipin::DigipinError> {
/// let codec = DigipinCodec::default();
/// let code = codec.encode(28.6139, 77.2090)?;
/// assert_eq!(code.to_string(), "39J-438-TJC7");
///
/// let (lat, lon) = codec.decode("39J-438-TJC7")?;
/// assert_eq!((lat, lon), (28.613901, 77.208998));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigipinCodec {
    region: BoundingRegion,
    grid: GridTable,
}

impl Default for DigipinCodec {
    fn default() -> Self {
        Self::INDIA
    }
}

impl DigipinCodec {
    /// The standard DIGIPIN codec.
    pub const INDIA: Self = Self {
        region: INDIA_BOUNDS,
        grid: DIGIPIN_GRID,
    };

    /// Codec over a custom region using the standard symbol table.
    pub const fn new(region: BoundingRegion) -> Self {
        Self {
            region,
            grid: DIGIPIN_GRID,
        }
    }

    pub fn region(&self) -> &BoundingRegion {
        &self.region
    }

    pub fn grid(&self) -> &GridTable {
        &self.grid
    }

    fn validate(&self, lat: f64, lon: f64) -> Result<(), DigipinError> {
        if !self.region.contains_lat(lat) {
            return Err(DigipinError::latitude(lat));
        }
        if !self.region.contains_lon(lon) {
            return Err(DigipinError::longitude(lon));
        }
        Ok(())
    }

    /// Encodes a coordinate into a ten symbol code.
    ///
    /// Bounds are inclusive. Fails with `OutOfRange` before any subdivision
    /// when either axis falls outside the region.
    pub fn encode(&self, lat: f64, lon: f64) -> Result<DigipinCode, DigipinError> {
        let steps = self.encode_trace(lat, lon)?;
        Ok(DigipinCode::from_symbols(steps.iter().map(|step| step.symbol)))
    }

    /// Every level the encoder passes through for `(lat, lon)`.
    pub fn encode_trace(&self, lat: f64, lon: f64) -> Result<Vec<LevelStep>, DigipinError> {
        self.validate(lat, lon)?;

        let mut region = self.region;
        let steps: Vec<LevelStep> = (1..=CODE_LENGTH)
            .map(|level| {
                let (position, narrowed) = region.narrow_to(lat, lon);
                region = narrowed;
                LevelStep {
                    level,
                    symbol: self.grid.symbol_at(position),
                    position,
                    region,
                }
            })
            .collect();

        Ok(steps)
    }

    /// Parses a code against this codec's symbol table.
    pub fn parse(&self, code: &str) -> Result<DigipinCode, DigipinError> {
        DigipinCode::parse_with(&self.grid, code)
    }

    /// Every level the decoder passes through for `code`.
    pub fn decode_trace(&self, code: &str) -> Result<Vec<LevelStep>, DigipinError> {
        let code = self.parse(code)?;

        let mut region = self.region;
        code.symbols()
            .enumerate()
            .map(|(i, symbol)| -> Result<LevelStep, DigipinError> {
                let position = self.grid.locate(symbol)?;
                region = region.subcell(position);
                Ok(LevelStep {
                    level: i + 1,
                    symbol,
                    position,
                    region,
                })
            })
            .collect()
    }

    /// The level-10 cell named by `code`, unrounded.
    pub fn cell_bounds(&self, code: &str) -> Result<BoundingRegion, DigipinError> {
        let steps = self.decode_trace(code)?;
        Ok(steps.last().map_or(self.region, |step| step.region))
    }

    /// Decodes a code, with or without separators, to the `(lat, lon)` centre
    /// of its cell rounded to six decimal places.
    pub fn decode(&self, code: &str) -> Result<(f64, f64), DigipinError> {
        let (lat, lon) = self.cell_bounds(code)?.center();
        Ok((round_to(lat, DECIMAL_PLACES), round_to(lon, DECIMAL_PLACES)))
    }
}

/// Encodes `(lat, lon)` with the standard DIGIPIN codec.
///
/// # Example
/// ```
/// # fn main() -> Result<(), digipin::DigipinError> {
/// let code = digipin::encode(12.9716, 77.5946)?;
/// assert_eq!(code.to_string(), "4P3-JK8-52C9");
/// assert_eq!(code.as_str(), "4P3JK852C9");
/// # Ok(())
/// # }
/// ```
pub fn encode(lat: f64, lon: f64) -> Result<DigipinCode, DigipinError> {
    DigipinCodec::INDIA.encode(lat, lon)
}

/// Decodes a code with the standard DIGIPIN codec, returning `(lat, lon)`.
///
/// # Example
/// ```
/// # fn main() -> Result<(), digipin::DigipinError> {
/// let (lat, lon) = digipin::decode("4P3-JK8-52C9")?;
/// assert_eq!((lat, lon), (12.971601, 77.594584));
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<(f64, f64), DigipinError> {
    DigipinCodec::INDIA.decode(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{SEPARATOR, SEPARATOR_POSITIONS};
    use crate::util::error::Axis;
    use proptest::prelude::*;

    /// Edge of a level-10 cell in degrees; both axes span 36 degrees.
    const CELL_EDGE: f64 = 36.0 / 1_048_576.0;

    #[test]
    fn test_new_delhi_vector() -> Result<(), DigipinError> {
        let code = encode(28.6139, 77.2090)?;
        assert_eq!(code.as_str(), "39J438TJC7");
        assert_eq!(code.to_string(), "39J-438-TJC7");

        let (lat, lon) = decode(&code.to_string())?;
        assert_eq!((lat, lon), (28.613901, 77.208998));
        assert!((lat - 28.6139).abs() < 1e-5);
        assert!((lon - 77.2090).abs() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_known_cities() -> Result<(), DigipinError> {
        let cases = [
            (12.9716, 77.5946, "4P3-JK8-52C9", (12.971601, 77.594584)),
            (19.0760, 72.8777, "4FK-595-8823", (19.075983, 72.877707)),
        ];

        for (lat, lon, expected, center) in cases {
            let code = encode(lat, lon)?;
            assert_eq!(code.to_string(), expected);
            assert_eq!(decode(expected)?, center);
        }
        Ok(())
    }

    #[test]
    fn test_region_corners() -> Result<(), DigipinError> {
        assert_eq!(encode(2.5, 63.5)?.as_str(), "LLLLLLLLLL");
        assert_eq!(encode(38.5, 63.5)?.as_str(), "FFFFFFFFFF");
        assert_eq!(encode(2.5, 99.5)?.as_str(), "TTTTTTTTTT");
        assert_eq!(encode(38.5, 99.5)?.as_str(), "8888888888");

        assert_eq!(decode("888-888-8888")?, (38.499983, 99.499983));
        assert_eq!(decode("LLL-LLL-LLLL")?, (2.500017, 63.500017));
        Ok(())
    }

    #[test]
    fn test_interior_boundary_goes_north_east() -> Result<(), DigipinError> {
        // 20.5 / 81.5 is the corner shared by four level-1 cells.
        assert_eq!(encode(20.5, 81.5)?.as_str(), "2LLLLLLLLL");
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            encode(1.0, 80.0),
            Err(DigipinError::OutOfRange {
                axis: Axis::Latitude,
                value: 1.0
            })
        );
        assert_eq!(
            encode(20.0, 100.0),
            Err(DigipinError::OutOfRange {
                axis: Axis::Longitude,
                value: 100.0
            })
        );
        assert!(matches!(
            encode(38.500001, 80.0),
            Err(DigipinError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
    }

    #[test]
    fn test_latitude_checked_first() {
        assert!(matches!(
            encode(50.0, 200.0),
            Err(DigipinError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(
            encode(f64::NAN, 80.0),
            Err(DigipinError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            encode(20.0, f64::NAN),
            Err(DigipinError::OutOfRange {
                axis: Axis::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejections() {
        assert_eq!(decode("ABC"), Err(DigipinError::InvalidLength(3)));
        assert_eq!(decode("0000000000"), Err(DigipinError::InvalidSymbol('0')));
        assert_eq!(decode("39J-438-TJC7-8"), Err(DigipinError::InvalidLength(11)));
        assert_eq!(decode("39J 438 TJC7"), Err(DigipinError::InvalidLength(12)));
    }

    #[test]
    fn test_decode_ignores_separator_placement() -> Result<(), DigipinError> {
        let expected = decode("39J-438-TJC7")?;
        assert_eq!(decode("39J438TJC7")?, expected);
        assert_eq!(decode("39-J438-TJ-C7")?, expected);
        Ok(())
    }

    #[test]
    fn test_cell_bounds_contains_input() -> Result<(), DigipinError> {
        let bounds = DigipinCodec::INDIA.cell_bounds("39J-438-TJC7")?;

        assert!(bounds.contains(28.6139, 77.2090));
        assert_eq!(bounds.max_lat() - bounds.min_lat(), CELL_EDGE);
        assert_eq!(bounds.max_lon() - bounds.min_lon(), CELL_EDGE);
        Ok(())
    }

    #[test]
    fn test_trace_levels() -> Result<(), DigipinError> {
        let trace = DigipinCodec::INDIA.encode_trace(28.6139, 77.2090)?;

        assert_eq!(trace.len(), CODE_LENGTH);
        assert_eq!(trace[0].level, 1);
        assert_eq!(trace[0].region, BoundingRegion::new(20.5, 29.5, 72.5, 81.5)?);
        assert_eq!(trace[9].level, 10);

        for pair in trace.windows(2) {
            let (outer, inner) = (pair[0].region, pair[1].region);
            assert!(inner.min_lat() >= outer.min_lat() && inner.max_lat() <= outer.max_lat());
            assert!(inner.min_lon() >= outer.min_lon() && inner.max_lon() <= outer.max_lon());
            assert_eq!(inner.lat_div() * 4.0, outer.lat_div());
        }
        Ok(())
    }

    #[test]
    fn test_custom_region_codec() -> Result<(), DigipinError> {
        let codec = DigipinCodec::new(BoundingRegion::new(0.0, 4.0, 10.0, 14.0)?);

        assert_eq!(codec.encode(3.5, 10.5)?.as_str().chars().next(), Some('F'));
        assert!(codec.encode(28.6139, 77.2090).is_err());

        let code = codec.encode(1.25, 12.75)?;
        let (lat, lon) = codec.decode(code.as_str())?;
        assert!((lat - 1.25).abs() < 1e-5);
        assert!((lon - 12.75).abs() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<DigipinCodec>();
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_one_cell(lat in 2.5f64..38.5, lon in 63.5f64..99.5) {
            let code = encode(lat, lon).unwrap();
            let (dlat, dlon) = decode(code.as_str()).unwrap();

            prop_assert!((dlat - lat).abs() <= CELL_EDGE);
            prop_assert!((dlon - lon).abs() <= CELL_EDGE);
        }

        #[test]
        fn prop_encode_is_deterministic(lat in 2.5f64..=38.5, lon in 63.5f64..=99.5) {
            prop_assert_eq!(encode(lat, lon).unwrap(), encode(lat, lon).unwrap());
        }

        #[test]
        fn prop_code_shape_and_alphabet(lat in 2.5f64..=38.5, lon in 63.5f64..=99.5) {
            let code = encode(lat, lon).unwrap();
            prop_assert_eq!(code.as_str().chars().count(), CODE_LENGTH);
            prop_assert!(code.symbols().all(|s| DIGIPIN_GRID.locate(s).is_ok()));

            let shown: Vec<char> = code.to_string().chars().collect();
            prop_assert_eq!(shown.len(), CODE_LENGTH + 2);
            prop_assert_eq!(shown[SEPARATOR_POSITIONS[0]], SEPARATOR);
            prop_assert_eq!(shown[SEPARATOR_POSITIONS[1] + 1], SEPARATOR);
        }

        #[test]
        fn prop_encoder_and_decoder_agree_per_level(lat in 2.5f64..=38.5, lon in 63.5f64..=99.5) {
            let code = encode(lat, lon).unwrap();
            let encoded = DigipinCodec::INDIA.encode_trace(lat, lon).unwrap();
            let decoded = DigipinCodec::INDIA.decode_trace(code.as_str()).unwrap();

            for (e, d) in encoded.iter().zip(&decoded) {
                prop_assert_eq!(e.region, d.region);
                prop_assert_eq!(e.position, d.position);
            }
        }

        #[test]
        fn prop_cell_contains_input(lat in 2.5f64..=38.5, lon in 63.5f64..=99.5) {
            let code = encode(lat, lon).unwrap();
            let bounds = DigipinCodec::INDIA.cell_bounds(code.as_str()).unwrap();
            prop_assert!(bounds.contains(lat, lon));
        }
    }
}
