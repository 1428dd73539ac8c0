//! Generic record framework shared by the gym entities.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be managed by a store
//! - [`ResourceStore`] - Generic in-memory store with CRUD and custom actions
//! - [`Clock`] - Source of today's date, with [`SystemClock`] for production use
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a clock that tests can pin and advance.

pub mod clock;
pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::clock::*;
pub use self::core::*;
