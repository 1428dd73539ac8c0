//! Library book catalog.

pub mod service;

pub use service::*;
