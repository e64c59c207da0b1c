//! Symbol value object for underlying tickers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::position::PositionError;

/// Maximum accepted symbol length.
const MAX_SYMBOL_LEN: usize = 21;

/// An underlying ticker symbol (e.g. "AAPL", "BRK.B").
///
/// Informational only to the payoff engine; portfolio summaries group by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the symbol.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty, too long, or contains characters other
    /// than ASCII alphanumerics, `.` and `-`.
    pub fn validate(&self) -> Result<(), PositionError> {
        if self.0.is_empty() {
            return Err(PositionError::InvalidSymbol {
                message: "Symbol cannot be empty".to_string(),
            });
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(PositionError::InvalidSymbol {
                message: "Symbol exceeds maximum length".to_string(),
            });
        }

        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(PositionError::InvalidSymbol {
                message: "Symbol contains invalid characters".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("aapl");
        assert_eq!(s.as_str(), "AAPL");
    }

    #[test]
    fn symbol_new_trims_whitespace() {
        assert_eq!(Symbol::new("  msft ").as_str(), "MSFT");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("MSFT");
        assert_eq!(format!("{s}"), "MSFT");
    }

    #[test]
    fn symbol_validate_empty() {
        assert!(Symbol::new("").validate().is_err());
    }

    #[test]
    fn symbol_validate_too_long() {
        assert!(Symbol::new("A".repeat(22)).validate().is_err());
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        assert!(Symbol::new("AA PL").validate().is_err());
        assert!(Symbol::new("AAPL$").validate().is_err());
    }

    #[test]
    fn symbol_validate_share_class() {
        assert!(Symbol::new("brk.b").validate().is_ok());
    }

    #[test]
    fn symbol_serde_normalizes() {
        let parsed: Symbol = serde_json::from_str("\"tsla\"").unwrap();
        assert_eq!(parsed.as_str(), "TSLA");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"TSLA\"");
    }
}
