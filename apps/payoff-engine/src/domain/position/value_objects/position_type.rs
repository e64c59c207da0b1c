//! Position Type Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::position::PositionError;

/// Kind of option position.
///
/// Every payoff and metrics formula matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// Short call against 100 shares per contract of owned stock.
    CoveredCall,
    /// Short call without the underlying.
    NakedCall,
    /// Short put fully collateralized by cash.
    CashSecuredPut,
    /// Short put on margin.
    NakedPut,
    /// Long call.
    BuyCall,
    /// Long put.
    BuyPut,
}

impl PositionType {
    /// All variants, in display order.
    pub const ALL: [Self; 6] = [
        Self::CoveredCall,
        Self::NakedCall,
        Self::CashSecuredPut,
        Self::NakedPut,
        Self::BuyCall,
        Self::BuyPut,
    ];

    /// Check if the option was sold (premium is income).
    #[must_use]
    pub const fn is_short(&self) -> bool {
        match self {
            Self::CoveredCall | Self::NakedCall | Self::CashSecuredPut | Self::NakedPut => true,
            Self::BuyCall | Self::BuyPut => false,
        }
    }

    /// Check if losses grow without bound as the underlying rises.
    #[must_use]
    pub const fn has_unlimited_loss(&self) -> bool {
        matches!(self, Self::NakedCall)
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoveredCall => write!(f, "Covered Call"),
            Self::NakedCall => write!(f, "Naked Call"),
            Self::CashSecuredPut => write!(f, "Cash-Secured Put"),
            Self::NakedPut => write!(f, "Naked Put"),
            Self::BuyCall => write!(f, "Buy Call"),
            Self::BuyPut => write!(f, "Buy Put"),
        }
    }
}

impl FromStr for PositionType {
    type Err = PositionError;

    /// Accepts the snake_case serde name, the display label, or a compact
    /// abbreviation (`cc`, `csp`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "coveredcall" | "cc" => Ok(Self::CoveredCall),
            "nakedcall" | "nc" => Ok(Self::NakedCall),
            "cashsecuredput" | "csp" => Ok(Self::CashSecuredPut),
            "nakedput" | "np" => Ok(Self::NakedPut),
            "buycall" | "longcall" => Ok(Self::BuyCall),
            "buyput" | "longput" => Ok(Self::BuyPut),
            _ => Err(PositionError::UnknownPositionType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_type_display() {
        assert_eq!(PositionType::CoveredCall.to_string(), "Covered Call");
        assert_eq!(PositionType::CashSecuredPut.to_string(), "Cash-Secured Put");
        assert_eq!(PositionType::BuyPut.to_string(), "Buy Put");
    }

    #[test]
    fn position_type_is_short() {
        assert!(PositionType::CoveredCall.is_short());
        assert!(PositionType::NakedPut.is_short());
        assert!(!PositionType::BuyCall.is_short());
        assert!(!PositionType::BuyPut.is_short());
    }

    #[test]
    fn only_naked_call_has_unlimited_loss() {
        let unlimited: Vec<_> = PositionType::ALL
            .iter()
            .filter(|t| t.has_unlimited_loss())
            .collect();
        assert_eq!(unlimited, vec![&PositionType::NakedCall]);
    }

    #[test]
    fn position_type_parse() {
        assert_eq!("covered_call".parse::<PositionType>().unwrap(), PositionType::CoveredCall);
        assert_eq!("Cash-Secured Put".parse::<PositionType>().unwrap(), PositionType::CashSecuredPut);
        assert_eq!("CSP".parse::<PositionType>().unwrap(), PositionType::CashSecuredPut);
        assert_eq!("long put".parse::<PositionType>().unwrap(), PositionType::BuyPut);
        assert!("iron condor".parse::<PositionType>().is_err());
    }

    #[test]
    fn position_type_display_round_trips_through_parse() {
        for kind in PositionType::ALL {
            assert_eq!(kind.to_string().parse::<PositionType>().unwrap(), kind);
        }
    }

    #[test]
    fn position_type_serde() {
        let json = serde_json::to_string(&PositionType::NakedPut).unwrap();
        assert_eq!(json, "\"naked_put\"");

        let parsed: PositionType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PositionType::NakedPut);
    }
}
