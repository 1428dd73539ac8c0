//! # Gym Records
//!
//! > **In-memory record keeping for a gym and a small library catalog.**
//!
//! This crate manages members, equipment and payments for a gym, plus a list-backed
//! book catalog. Everything lives in process memory; there is no persistence layer.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Records + Actions
//!
//! Each gym record type is a plain data struct with a small lifecycle:
//! - **Members** renew and lapse; their passwords are stored as salted bcrypt hashes.
//! - **Equipment** moves between Available, In Use, Under Maintenance and Out of Order.
//! - **Payments** go Pending -> Completed -> Refunded (or Pending -> Failed).
//!
//! The lifecycle steps are expressed as *actions* on an [`Entity`](framework::Entity),
//! so a single generic [`ResourceStore`](framework::ResourceStore) handles create, read,
//! update, delete and action dispatch for every record type.
//!
//! ### Booleans, not errors
//!
//! Refused transitions (refunding a pending payment, adding a book without an ISBN,
//! updating a missing book) return `false`. Only genuinely exceptional failures
//! such as a password hashing error or an unknown store id surface as `Err`.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Explicit dates
//! Every date rule has an `*_on(.., today)` form. The convenience forms read the host
//! calendar through [`SystemClock`](framework::SystemClock); [`GymSystem`](runtime::GymSystem)
//! takes any [`Clock`](framework::Clock), and tests pin one with
//! [`FixedClock`](framework::mock::FixedClock).
//!
//! ### 2. Single-threaded
//! Stores are owned values mutated through `&mut self`. Callers that share them
//! across threads must serialize access themselves.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields. See [`runtime::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the [`Entity`](framework::Entity) contract, the generic store and clocks.
//! - [`model`]: the records and their create/update DTOs.
//! - [`membership`], [`equipment`], [`payment`]: actions and entity implementations.
//! - [`catalog`]: the [`BookService`](catalog::BookService).
//! - [`runtime`]: the [`GymSystem`](runtime::GymSystem) orchestrator and tracing setup.
//! - [`config`]: settings read from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Cheaper password hashing for local experiments
//! GYM_PASSWORD_COST=4 RUST_LOG=debug cargo run
//! ```

pub mod catalog;
pub mod config;
pub mod equipment;
pub mod framework;
pub mod membership;
pub mod model;
pub mod payment;
pub mod runtime;
