use crate::core::constants::{CODE_LENGTH, DIGIPIN_GRID, SEPARATOR, SEPARATOR_POSITIONS};
use crate::core::grid::GridTable;
use crate::util::error::DigipinError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A validated DIGIPIN: exactly ten grid symbols.
///
/// `as_str` gives the bare symbols, `Display` the separated form used for
/// display (`39J-438-TJC7`). Serializes to the separated form and accepts
/// either form when deserializing or parsing.
///
/// # Example
/// ```
/// use digipin::DigipinCode;
///
/// # fn main() -> Result<(), digipin::DigipinError> {
/// let code: DigipinCode = "39J-438-TJC7".parse()?;
/// assert_eq!(code.as_str(), "39J438TJC7");
/// assert_eq!(code.to_string(), "39J-438-TJC7");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigipinCode(String);

impl DigipinCode {
    /// Wraps symbols already drawn from the grid table.
    pub(crate) fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        Self(symbols.into_iter().collect())
    }

    /// Parses `input` against `grid`, ignoring separators.
    ///
    /// Length is checked before any symbol, so `"ABC"` reports
    /// `InvalidLength` rather than `InvalidSymbol`.
    pub fn parse_with(grid: &GridTable, input: &str) -> Result<Self, DigipinError> {
        let symbols: String = input.chars().filter(|&c| c != SEPARATOR).collect();

        let len = symbols.chars().count();
        if len != CODE_LENGTH {
            return Err(DigipinError::InvalidLength(len));
        }

        if let Some(invalid) = symbols.chars().find(|&c| !grid.contains(c)) {
            return Err(DigipinError::InvalidSymbol(invalid));
        }

        Ok(Self(symbols))
    }

    /// The ten symbols without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> {
        self.0.chars()
    }

    /// The first `level` symbols, naming the enclosing cell at that level.
    ///
    /// Returns `None` for level 0 or levels past the code length.
    pub fn prefix(&self, level: usize) -> Option<&str> {
        if level == 0 {
            return None;
        }
        self.0.get(..level)
    }
}

impl fmt::Display for DigipinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.chars().enumerate() {
            if SEPARATOR_POSITIONS.contains(&i) {
                f.write_char(SEPARATOR)?;
            }
            f.write_char(symbol)?;
        }
        Ok(())
    }
}

impl FromStr for DigipinCode {
    type Err = DigipinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&DIGIPIN_GRID, s)
    }
}

impl TryFrom<String> for DigipinCode {
    type Error = DigipinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigipinCode> for String {
    fn from(code: DigipinCode) -> Self {
        code.to_string()
    }
}

impl AsRef<str> for DigipinCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
