//! Runtime orchestration.
//!
//! # Main Components
//!
//! - [`GymSystem`] - Owns the member, equipment and payment stores and their clock
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod gym_system;
pub mod tracing;

pub use self::gym_system::*;
pub use self::tracing::*;
