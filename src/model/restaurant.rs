use crate::model::{AverageRating, MenuItem, Rating};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u64);

impl From<u64> for RestaurantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// Symbol shown for an active restaurant.
pub const ACTIVE_SYMBOL: &str = "✅";
/// Symbol shown for an inactive restaurant.
pub const INACTIVE_SYMBOL: &str = "❌";

/// Represents a restaurant with its menu, ratings and activation state.
///
/// # Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Restaurant`](#impl-Entity-for-Restaurant) for details on:
/// - Creation parameters ([`RestaurantCreate`])
/// - Custom actions ([`RestaurantAction`](crate::restaurant_actor::RestaurantAction))
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub(crate) id: RestaurantId,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) active: bool,
    pub(crate) ratings: Vec<Rating>,
    pub(crate) menu: Vec<MenuItem>,
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub category: String,
}

impl RestaurantCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

impl Restaurant {
    /// Creates an inactive Restaurant with no ratings and an empty menu.
    ///
    /// # Notes
    /// `name` and `category` are stored title-cased ("pizza hut" -> "Pizza Hut").
    pub fn new(id: RestaurantId, name: &str, category: &str) -> Self {
        Self {
            id,
            name: title_case(name),
            category: title_case(category),
            active: false,
            ratings: Vec::new(),
            menu: Vec::new(),
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Mean of all stored scores, recomputed on every call.
    pub fn average_rating(&self) -> AverageRating {
        AverageRating::of(&self.ratings)
    }

    pub fn active_indicator(&self) -> &'static str {
        if self.active {
            ACTIVE_SYMBOL
        } else {
            INACTIVE_SYMBOL
        }
    }
}

impl Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nome: {}, Categoria: {}, Ativado: {}",
            self.name,
            self.category,
            self.active_indicator()
        )
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// Any character without case ends a word, so "o'neil" becomes "O'Neil",
/// "7eleven" becomes "7Eleven" and "中abc" becomes "中Abc".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("pizza Hut"), "Pizza Hut");
        assert_eq!(title_case("fast FOOD"), "Fast Food");
        assert_eq!(title_case("  praça   são PAULO "), "  Praça   São Paulo ");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("7eleven"), "7Eleven");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("中abc"), "中Abc");
        assert_eq!(title_case("sushi中bar"), "Sushi中Bar");
    }

    #[test]
    fn test_new_restaurant_defaults() {
        let restaurant = Restaurant::new(RestaurantId(1), "pizza Hut", "fast FOOD");
        assert_eq!(restaurant.name(), "Pizza Hut");
        assert_eq!(restaurant.category(), "Fast Food");
        assert!(!restaurant.is_active());
        assert!(restaurant.ratings().is_empty());
        assert!(restaurant.menu().is_empty());
        assert_eq!(restaurant.average_rating(), AverageRating::NoRatings);
        assert_eq!(restaurant.active_indicator(), INACTIVE_SYMBOL);
    }

    #[test]
    fn test_display() {
        let restaurant = Restaurant::new(RestaurantId(3), "praça", "gourmet");
        assert_eq!(restaurant.to_string(), "Nome: Praça, Categoria: Gourmet, Ativado: ❌");
        assert_eq!(restaurant.id().to_string(), "restaurant_3");
    }
}
