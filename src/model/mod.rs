//! Pure data structures (DTOs); [`Restaurant`] implements the [`Entity`](crate::framework::Entity) trait.

pub mod menu_item;
pub mod rating;
pub mod restaurant;

pub use menu_item::*;
pub use rating::*;
pub use restaurant::*;
