//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_seq_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Each ID
//! wraps a monotonic `u32` sequence number and displays as a prefixed,
//! zero-padded string (`P001`, `C001`, `S0001`), so the formatted form is
//! derived from the counter rather than the other way around.

/// Errors that can occur when parsing a sequential ID from its display form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// The input does not start with the expected prefix letter.
    #[error("id must start with '{expected}'")]
    WrongPrefix {
        /// Prefix letter the ID type requires.
        expected: char,
    },
    /// The part after the prefix is not a positive integer.
    #[error("id sequence part is not a positive integer: {0:?}")]
    InvalidSequence(String),
}

/// Macro to define a type-safe sequential ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` using the display form (`P001`)
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Ord`, `Hash`
/// - `new()`, `seq()`, and `next()` for counter arithmetic
/// - `Display` producing the prefixed, zero-padded form
/// - `FromStr` parsing the display form back to the counter
///
/// # Example
///
/// ```rust
/// # use tillpoint_core::define_seq_id;
/// define_seq_id!(ProductId, 'P', 3);
/// define_seq_id!(CustomerId, 'C', 3);
///
/// let first = ProductId::new(1);
/// assert_eq!(first.to_string(), "P001");
/// assert_eq!(first.next(), ProductId::new(2));
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = CustomerId::new(1);
/// ```
#[macro_export]
macro_rules! define_seq_id {
    ($name:ident, $prefix:literal, $width:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Prefix letter used in the display form.
            pub const PREFIX: char = $prefix;
            /// Minimum zero-padded width of the sequence part.
            pub const WIDTH: usize = $width;

            /// Create an ID from a 1-based sequence number.
            #[must_use]
            pub const fn new(seq: u32) -> Self {
                Self(seq)
            }

            /// Get the underlying sequence number.
            #[must_use]
            pub const fn seq(&self) -> u32 {
                self.0
            }

            /// The ID following this one in sequence.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}{:0width$}", Self::PREFIX, self.0, width = Self::WIDTH)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let rest = s.strip_prefix(Self::PREFIX).ok_or(
                    $crate::types::id::IdParseError::WrongPrefix {
                        expected: Self::PREFIX,
                    },
                )?;
                let seq: u32 = rest.parse().map_err(|_| {
                    $crate::types::id::IdParseError::InvalidSequence(rest.to_owned())
                })?;
                if seq == 0 {
                    return Err($crate::types::id::IdParseError::InvalidSequence(
                        rest.to_owned(),
                    ));
                }
                Ok(Self(seq))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let s = <::std::string::String as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

define_seq_id!(ProductId, 'P', 3);
define_seq_id!(CustomerId, 'C', 3);
define_seq_id!(SaleId, 'S', 4);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_padding() {
        assert_eq!(ProductId::new(1).to_string(), "P001");
        assert_eq!(ProductId::new(42).to_string(), "P042");
        assert_eq!(CustomerId::new(7).to_string(), "C007");
        assert_eq!(SaleId::new(1).to_string(), "S0001");
    }

    #[test]
    fn test_display_overflows_width() {
        // Width is a minimum, not a cap.
        assert_eq!(ProductId::new(1234).to_string(), "P1234");
    }

    #[test]
    fn test_next_increments_sequence() {
        assert_eq!(SaleId::new(9).next(), SaleId::new(10));
        assert_eq!(SaleId::new(9).next().to_string(), "S0010");
    }

    #[test]
    fn test_parse_roundtrip() {
        let id: ProductId = "P010".parse().unwrap();
        assert_eq!(id, ProductId::new(10));
        assert_eq!(id.to_string(), "P010");
    }

    #[test]
    fn test_parse_wrong_prefix() {
        assert!(matches!(
            "C001".parse::<ProductId>(),
            Err(IdParseError::WrongPrefix { expected: 'P' })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage_and_zero() {
        assert!(matches!(
            "Pabc".parse::<ProductId>(),
            Err(IdParseError::InvalidSequence(_))
        ));
        assert!(matches!(
            "P000".parse::<ProductId>(),
            Err(IdParseError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&SaleId::new(3)).unwrap();
        assert_eq!(json, "\"S0003\"");

        let parsed: SaleId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SaleId::new(3));
    }
}
