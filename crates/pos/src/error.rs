//! Unified error handling for the POS engine.
//!
//! All engine operations are synchronous and report errors to their caller
//! rather than recovering automatically; nothing here retries. The
//! presentation layer owns turning these into user-facing messages.

use thiserror::Error;

use crate::store::StoreError;

/// Engine-level error type.
#[derive(Debug, Error)]
pub enum PosError {
    /// Malformed or missing input (required field empty, non-positive
    /// quantity, unparsable number).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced ID does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requested quantity exceeds the quantity on hand. Raised both when a
    /// line is added to a cart and again at checkout re-validation.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product name the shortfall applies to.
        product: String,
        /// Quantity the caller asked for.
        requested: u32,
        /// Quantity currently on hand.
        available: u32,
    },

    /// Checkout was attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// An underlying storage read or write failed. In-memory state is not
    /// rolled back; callers should treat this as "state changed, disk not
    /// yet consistent" and retry the save.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),
}

/// Result type alias for [`PosError`].
pub type Result<T> = std::result::Result<T, PosError>;
