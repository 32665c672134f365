//! Lifecycle management: owning the restaurant registry and wiring up logging.
//!
//! # Main Components
//!
//! - [`RestaurantDirectory`] - Owns every restaurant created during the program run
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod directory;
pub mod tracing;

pub use directory::*;
pub use self::tracing::*;
