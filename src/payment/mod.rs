//! Payment-specific logic: lifecycle actions and the entity implementation.

mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::{sequential_ids, ResourceStore};
use crate::model::Payment;

/// Creates an empty Payment store with sequential ids.
pub fn new_store() -> ResourceStore<Payment> {
    ResourceStore::new(sequential_ids())
}
