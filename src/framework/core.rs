//! # Core Resource Framework
//!
//! This module defines the generic building blocks for managing resources.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all resource types must implement.
//! - [`ResourceStore`]: The generic, append-only store that owns entities.
//! - [`FrameworkError`]: Errors raised by the store itself (NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that resource types must satisfy, the store
/// logic (id allocation, lookup, dispatch, logging) is written *once*.
///
/// Associated types keep every operation typed: a `Restaurant` store only accepts
/// a `RestaurantCreate` payload and `RestaurantAction`s.
///
/// # Provided Methods (Hooks)
/// - [`Entity::on_create`] runs right after construction, before the entity is stored.
///   The default implementation does nothing (`Ok(())`).
pub trait Entity: Sized {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Debug;

    /// Enum representing resource-specific operations (e.g., `ReceiveRating`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The resource-specific error type. Framework failures convert into it.
    type Error: std::error::Error + From<FrameworkError>;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Called immediately after the entity is constructed.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC ERRORS
// =============================================================================

/// Errors that can occur within the framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// Append-only collection of entities, kept in creation order.
///
/// There is no delete: once created, an entity lives as long as the store.
/// The store is single-owner; callers needing shared access wrap it themselves.
pub struct ResourceStore<T: Entity> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id_fn: Box<dyn FnMut() -> T::Id>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + 'static) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    fn entity_type() -> &'static str {
        // "Restaurant" instead of "restaurant_recipe::model::restaurant::Restaurant"
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Builds a new entity from `params` and appends it.
    ///
    /// A failed create still advances the id generator.
    pub fn create(&mut self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let id = (self.next_id_fn)();

        let mut item = T::from_create_params(id.clone(), params).inspect_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
        })?;
        item.on_create().inspect_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
        })?;

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(item);
        info!(entity_type, %id, size = self.entries.len(), "Created");
        Ok(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.index.get(id).map(|&pos| &self.entries[pos]);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn perform_action(&mut self, id: &T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(&pos) = self.index.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        let result = self.entries[pos].handle_action(action);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }

    /// Iterates entities in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Debug, PartialEq)]
    struct Table {
        id: u32,
        seats: u32,
        occupied: bool,
    }

    #[derive(Debug)]
    struct TableCreate {
        seats: u32,
    }

    #[derive(Debug)]
    enum TableAction {
        Seat,
        Release,
    }

    #[derive(Debug, thiserror::Error)]
    enum TableError {
        #[error("table needs at least one seat")]
        NoSeats,
        #[error("table already occupied")]
        Occupied,
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    impl Entity for Table {
        type Id = u32;
        type CreateParams = TableCreate;
        type Action = TableAction;
        type ActionResult = bool;
        type Error = TableError;

        fn from_create_params(id: u32, params: TableCreate) -> Result<Self, TableError> {
            Ok(Self { id, seats: params.seats, occupied: false })
        }

        fn on_create(&mut self) -> Result<(), TableError> {
            if self.seats == 0 {
                return Err(TableError::NoSeats);
            }
            Ok(())
        }

        fn handle_action(&mut self, action: TableAction) -> Result<bool, TableError> {
            match action {
                TableAction::Seat if self.occupied => Err(TableError::Occupied),
                TableAction::Seat => {
                    self.occupied = true;
                    Ok(true)
                }
                TableAction::Release => {
                    let was = self.occupied;
                    self.occupied = false;
                    Ok(was)
                }
            }
        }
    }

    fn store() -> ResourceStore<Table> {
        let mut counter = 0;
        ResourceStore::new(move || {
            counter += 1;
            counter
        })
    }

    // --- Test ---

    #[test]
    fn test_store_with_actions() {
        let mut store = store();

        let id = store.create(TableCreate { seats: 4 }).unwrap();
        assert_eq!(id, 1);

        assert!(store.perform_action(&id, TableAction::Seat).unwrap());
        assert!(store.get(&id).unwrap().occupied);

        let again = store.perform_action(&id, TableAction::Seat);
        assert!(matches!(again, Err(TableError::Occupied)));

        assert!(store.perform_action(&id, TableAction::Release).unwrap());
        assert!(!store.get(&id).unwrap().occupied);
    }

    #[test]
    fn test_iteration_keeps_creation_order() {
        let mut store = store();
        for seats in [2, 6, 4] {
            store.create(TableCreate { seats }).unwrap();
        }

        let seats: Vec<u32> = store.iter().map(|t| t.seats).collect();
        assert_eq!(seats, vec![2, 6, 4]);
        let ids: Vec<u32> = store.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_hook_is_not_stored() {
        let mut store = store();
        let result = store.create(TableCreate { seats: 0 });
        assert!(matches!(result, Err(TableError::NoSeats)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = store();
        let result = store.perform_action(&42, TableAction::Release);
        assert!(matches!(
            result,
            Err(TableError::Framework(FrameworkError::NotFound(ref id))) if id == "42"
        ));
        assert!(store.get(&42).is_none());
    }
}
