//! Restaurant-specific resource logic: ratings, menu management and rendering.

mod actions;
pub mod display;
pub mod entity;
pub mod error;

pub use actions::*;
pub use display::*;
pub use entity::SCORE_RANGE;
pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Restaurant, RestaurantId};

/// Creates an empty Restaurant store whose ids count up from 1.
pub fn new_store() -> ResourceStore<Restaurant> {
    let mut next_id = 0;
    ResourceStore::new(move || {
        next_id += 1;
        RestaurantId(next_id)
    })
}
