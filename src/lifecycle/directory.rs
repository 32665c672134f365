use crate::framework::ResourceStore;
use crate::model::{AverageRating, MenuItem, Restaurant, RestaurantCreate, RestaurantId};
use crate::restaurant_actor::{self, RestaurantAction, RestaurantActionResult, RestaurantError};
use std::io::Write;
use tracing::{debug, instrument};

/// The registry of every restaurant created during a program run.
///
/// `RestaurantDirectory` is responsible for:
/// - **Registration**: every [`create_restaurant`](Self::create_restaurant) appends to the
///   registry; entries are never removed
/// - **Dispatch**: routing mutations to the right restaurant by [`RestaurantId`]
/// - **Listings**: rendering one restaurant's menu or the table of all restaurants
///
/// The caller creates it at startup and drops it at exit. It is not shared across
/// threads; wrap it in a `Mutex` if that is ever needed.
///
/// # Example
///
/// ```
/// use restaurant_recipe::lifecycle::RestaurantDirectory;
/// use restaurant_recipe::model::AverageRating;
///
/// let mut directory = RestaurantDirectory::new();
/// let id = directory.create_restaurant("burger king", "fast food")?;
/// directory.receive_rating(id, "Ana", 5.0)?;
/// directory.receive_rating(id, "Leo", 3.0)?;
/// assert_eq!(directory.average_rating(id)?, AverageRating::Score(4.0));
/// # Ok::<(), restaurant_recipe::restaurant_actor::RestaurantError>(())
/// ```
pub struct RestaurantDirectory {
    store: ResourceStore<Restaurant>,
}

impl Default for RestaurantDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantDirectory {
    pub fn new() -> Self {
        Self {
            store: restaurant_actor::new_store(),
        }
    }

    /// Registers a new inactive restaurant with title-cased name and category.
    #[instrument(skip(self))]
    pub fn create_restaurant(&mut self, name: &str, category: &str) -> Result<RestaurantId, RestaurantError> {
        self.store.create(RestaurantCreate::new(name, category))
    }

    pub fn get(&self, id: RestaurantId) -> Result<&Restaurant, RestaurantError> {
        self.store
            .get(&id)
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    /// Flips the active flag and returns its new value.
    #[instrument(skip(self))]
    pub fn toggle_active(&mut self, id: RestaurantId) -> Result<bool, RestaurantError> {
        match self.store.perform_action(&id, RestaurantAction::ToggleActive)? {
            RestaurantActionResult::ToggleActive(active) => Ok(active),
            _ => unreachable!("ToggleActive action must return ToggleActive result"),
        }
    }

    /// Records a rating; scores outside `[0, 5]` are refused with
    /// [`RestaurantError::InvalidRating`] and nothing is stored.
    #[instrument(skip(self))]
    pub fn receive_rating(&mut self, id: RestaurantId, customer: &str, score: f64) -> Result<(), RestaurantError> {
        let action = RestaurantAction::ReceiveRating {
            customer: customer.to_string(),
            score,
        };
        self.store.perform_action(&id, action).map(|_| ())
    }

    /// Adds an item to the restaurant's menu; malformed items are refused with
    /// [`RestaurantError::InvalidMenuItem`].
    #[instrument(skip(self, item), fields(item = %item.name))]
    pub fn add_menu_item(&mut self, id: RestaurantId, item: MenuItem) -> Result<(), RestaurantError> {
        self.store
            .perform_action(&id, RestaurantAction::AddMenuItem(item))
            .map(|_| ())
    }

    pub fn average_rating(&self, id: RestaurantId) -> Result<AverageRating, RestaurantError> {
        Ok(self.get(id)?.average_rating())
    }

    pub fn active_indicator(&self, id: RestaurantId) -> Result<&'static str, RestaurantError> {
        Ok(self.get(id)?.active_indicator())
    }

    /// Writes one restaurant's menu to `out`.
    #[instrument(skip(self, out))]
    pub fn display_menu(&self, id: RestaurantId, out: &mut impl Write) -> Result<(), RestaurantError> {
        let restaurant = self.get(id)?;
        debug!(items = restaurant.menu().len(), "Rendering menu");
        restaurant.display_menu(out)
    }

    /// Writes the table of every registered restaurant, in creation order.
    #[instrument(skip(self, out))]
    pub fn list_all_restaurants(&self, out: &mut impl Write) -> Result<(), RestaurantError> {
        debug!(restaurants = self.store.len(), "Rendering listing");
        restaurant_actor::write_listing(out, self.store.iter())
    }

    /// [`display_menu`](Self::display_menu) to stdout.
    pub fn print_menu(&self, id: RestaurantId) -> Result<(), RestaurantError> {
        self.display_menu(id, &mut std::io::stdout().lock())
    }

    /// [`list_all_restaurants`](Self::list_all_restaurants) to stdout.
    pub fn print_all_restaurants(&self) -> Result<(), RestaurantError> {
        self.list_all_restaurants(&mut std::io::stdout().lock())
    }

    /// Restaurants in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
