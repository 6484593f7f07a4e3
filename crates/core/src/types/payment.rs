//! Payment method accepted at the till.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown payment method.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0:?}")]
pub struct PaymentMethodError(pub String);

/// How a sale was paid for.
///
/// Persisted in the sales ledger using the human-readable form
/// (`Cash`, `Card`, `UPI`, `Online`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    Online,
}

impl PaymentMethod {
    /// All supported methods, in display order.
    pub const ALL: [Self; 4] = [Self::Cash, Self::Card, Self::Upi, Self::Online];

    /// The human-readable label, as persisted in the ledger.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::Online => "Online",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(Self::Cash),
            "Card" => Ok(Self::Card),
            "UPI" => Ok(Self::Upi),
            "Online" => Ok(Self::Online),
            other => Err(PaymentMethodError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "Barter".parse::<PaymentMethod>(),
            Err(PaymentMethodError(_))
        ));
    }

    #[test]
    fn test_serde_upi_rename() {
        let json = serde_json::to_string(&PaymentMethod::Upi).unwrap();
        assert_eq!(json, "\"UPI\"");
    }
}
