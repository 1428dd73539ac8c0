//! Equipment-specific logic, including maintenance scheduling actions.

mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::{sequential_ids, ResourceStore};
use crate::model::Equipment;

/// Creates an empty Equipment store with sequential ids.
pub fn new_store() -> ResourceStore<Equipment> {
    ResourceStore::new(sequential_ids())
}
