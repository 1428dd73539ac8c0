//! # Core Record Framework
//!
//! This module defines the generic building blocks for the record stores.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all managed record types must implement.
//! - [`Context`]: The per-call environment handed to every entity hook.
//! - [`ResourceStore`]: The generic in-memory store that owns entities.
//! - [`FrameworkError`]: Common errors (e.g., NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::Config;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any record type must implement to be managed by [`ResourceStore`].
///
/// # Architecture Note
/// Members, equipment and payments all share the same lifecycle: they are created
/// from a payload, patched with an update DTO and driven through a handful of
/// domain-specific actions. Writing that contract once lets the store logic be
/// shared by every record type.
///
/// Associated types keep the payloads apart: a `Member` store only accepts a
/// `MemberCreate`, and sending it an `EquipmentCreate` does not compile.
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Copy + Display + Debug;

    /// The data required to create a new instance.
    type CreateParams: Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Debug;

    /// Enum representing record-specific operations (e.g., `PaymentAction::Refund`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(
        id: Self::Id,
        params: Self::CreateParams,
        ctx: &Context<'_>,
    ) -> Result<Self, String>;

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::UpdateParams, ctx: &Context<'_>) -> Result<(), String>;

    /// Handle a custom record-specific action.
    fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Context<'_>,
    ) -> Result<Self::ActionResult, String>;
}

/// The environment an entity hook runs in.
///
/// Dates are resolved once per call so a single operation never straddles midnight.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub today: NaiveDate,
    pub config: &'a Config,
}

impl<'a> Context<'a> {
    pub fn new(today: NaiveDate, config: &'a Config) -> Self {
        Self { today, config }
    }
}

// =============================================================================
// 2. THE ERRORS
// =============================================================================

/// Errors that can occur within the store itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a collection of entities.
///
/// Each store exclusively owns its records for the lifetime of the process.
/// Callers borrow them through [`ResourceStore::get`] or mutate them through
/// the update and action entry points, which run the entity hooks.
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + 'static) -> Self {
        Self {
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    // Extract just the type name (e.g., "Member" instead of "gym_records::model::member::Member")
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    pub fn create(
        &mut self,
        params: T::CreateParams,
        ctx: &Context<'_>,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let id = (self.next_id_fn)();

        match T::from_create_params(id, params, ctx) {
            Ok(item) => {
                self.store.insert(id, item);
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::Custom(e))
            }
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        let item = self.store.get(&id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn update(
        &mut self,
        id: T::Id,
        update: T::UpdateParams,
        ctx: &Context<'_>,
    ) -> Result<&T, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_update(update, ctx) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::Custom(e));
        }
        info!(entity_type, %id, "Updated");
        Ok(&*item)
    }

    pub fn delete(&mut self, id: T::Id) -> Result<T, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");
        match self.store.remove(&id) {
            Some(item) => {
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                Ok(item)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }

    pub fn perform_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &Context<'_>,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let result = item.handle_action(action, ctx).map_err(FrameworkError::Custom);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Returns a sequential id generator starting at 1.
pub fn sequential_ids() -> impl FnMut() -> u32 {
    let mut next = 0u32;
    move || {
        next += 1;
        next
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
