//! Custom actions for the Restaurant actor.
//!
//! This module defines the domain-specific operations (Actions) that mutate a
//! [`Restaurant`](crate::model::Restaurant): toggling it, rating it, and growing its menu.
//! These actions are handled by the [`Entity::handle_action`](crate::framework::Entity::handle_action) method.
//!
//! Read-only queries (average rating, listings) go through
//! [`ResourceStore::get`](crate::framework::ResourceStore::get) instead.

use crate::model::MenuItem;

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Flips the active flag.
    ToggleActive,
    /// Records a customer's score.
    ///
    /// # Errors
    /// Fails if the score lies outside `[0, 5]`.
    ReceiveRating { customer: String, score: f64 },
    /// Appends an item to the menu.
    ///
    /// # Errors
    /// Fails if the item does not pass [`MenuItem::validate`].
    AddMenuItem(MenuItem),
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantActionResult {
    /// Result from ToggleActive - the flag's new value
    ToggleActive(bool),
    /// Result from ReceiveRating - number of ratings now stored
    ReceiveRating(usize),
    /// Result from AddMenuItem - number of items now on the menu
    AddMenuItem(usize),
}
