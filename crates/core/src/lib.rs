//! Tillpoint Core - Shared types library.
//!
//! This crate provides common types used across all Tillpoint components:
//! - `pos` - Point-of-sale and inventory engine
//! - any presentation layer that embeds the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no clocks.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
