//! Entity trait implementation for the Restaurant domain type.
//!
//! This module contains the mutating operations of [`Restaurant`] and the
//! [`Entity`] implementation that lets a [`crate::framework::ResourceStore`] dispatch to them.

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::error::RestaurantError;
use crate::framework::Entity;
use crate::model::{MenuItem, Rating, Restaurant, RestaurantCreate, RestaurantId};
use tracing::warn;

/// Scores accepted by [`Restaurant::receive_rating`].
pub const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

impl Restaurant {
    /// Flips the active flag and returns its new value.
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Stores a rating from `customer`.
    ///
    /// # Errors
    /// [`RestaurantError::InvalidRating`] if `score` is outside `[0, 5]` (NaN included);
    /// nothing is stored in that case.
    pub fn receive_rating(&mut self, customer: impl Into<String>, score: f64) -> Result<(), RestaurantError> {
        if !SCORE_RANGE.contains(&score) {
            warn!(restaurant = %self.name, score, "Rating rejected");
            return Err(RestaurantError::InvalidRating { score });
        }
        self.ratings.push(Rating::new(customer, score));
        Ok(())
    }

    /// Appends `item` to the menu.
    ///
    /// # Errors
    /// [`RestaurantError::InvalidMenuItem`] if the item fails [`MenuItem::validate`];
    /// the menu is left unchanged.
    pub fn add_menu_item(&mut self, item: MenuItem) -> Result<(), RestaurantError> {
        if let Err(reason) = item.validate() {
            warn!(restaurant = %self.name, %reason, "Menu item rejected");
            return Err(RestaurantError::InvalidMenuItem(reason));
        }
        self.menu.push(item);
        Ok(())
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;
    type CreateParams = RestaurantCreate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Error = RestaurantError;

    /// Creates a new Restaurant from creation parameters.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, RestaurantError> {
        Ok(Self::new(id, &params.name, &params.category))
    }

    /// Handles custom actions for the Restaurant entity.
    ///
    /// # Actions
    /// - `ToggleActive`: Flips the flag, returns the new value
    /// - `ReceiveRating`: Validates and stores a score, returns the rating count
    /// - `AddMenuItem`: Validates and stores an item, returns the menu size
    fn handle_action(&mut self, action: RestaurantAction) -> Result<RestaurantActionResult, RestaurantError> {
        match action {
            RestaurantAction::ToggleActive => Ok(RestaurantActionResult::ToggleActive(self.toggle_active())),
            RestaurantAction::ReceiveRating { customer, score } => {
                self.receive_rating(customer, score)?;
                Ok(RestaurantActionResult::ReceiveRating(self.ratings.len()))
            }
            RestaurantAction::AddMenuItem(item) => {
                self.add_menu_item(item)?;
                Ok(RestaurantActionResult::AddMenuItem(self.menu.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AverageRating;

    fn restaurant() -> Restaurant {
        Restaurant::new(RestaurantId(1), "burger king", "fast food")
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut r = restaurant();
        assert!(r.toggle_active());
        assert!(!r.toggle_active());
        assert!(!r.is_active());
    }

    #[test]
    fn test_rejected_rating_is_not_stored() {
        let mut r = restaurant();
        assert_eq!(r.receive_rating("Ana", 7.0), Err(RestaurantError::InvalidRating { score: 7.0 }));
        assert!(r.receive_rating("Ana", f64::NAN).is_err());
        assert!(r.ratings().is_empty());
        assert_eq!(r.average_rating(), AverageRating::NoRatings);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut r = restaurant();
        r.receive_rating("Ana", 0.0).unwrap();
        r.receive_rating("Leo", 5.0).unwrap();
        assert_eq!(r.average_rating(), AverageRating::Score(2.5));
    }

    #[test]
    fn test_handle_action_reports_counts() {
        let mut r = restaurant();
        let result = r
            .handle_action(RestaurantAction::ReceiveRating { customer: "Ana".into(), score: 4.0 })
            .unwrap();
        assert_eq!(result, RestaurantActionResult::ReceiveRating(1));

        let result = r
            .handle_action(RestaurantAction::AddMenuItem(MenuItem::drink("Suco", 5.0, "Grande")))
            .unwrap();
        assert_eq!(result, RestaurantActionResult::AddMenuItem(1));

        let result = r.handle_action(RestaurantAction::AddMenuItem(MenuItem::drink("", 5.0, "Grande")));
        assert!(matches!(result, Err(RestaurantError::InvalidMenuItem(_))));
        assert_eq!(r.menu().len(), 1);
    }
}
