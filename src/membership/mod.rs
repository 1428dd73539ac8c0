//! Member-specific logic: credentials, membership actions and the entity implementation.

mod actions;
pub mod entity;
pub mod error;
pub mod password;

pub use actions::*;
pub use error::*;
pub use password::*;

use crate::framework::{sequential_ids, ResourceStore};
use crate::model::Member;

/// Creates an empty Member store with sequential ids.
pub fn new_store() -> ResourceStore<Member> {
    ResourceStore::new(sequential_ids())
}
