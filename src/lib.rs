#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant Recipe
//!
//! > **Restaurants, menus and ratings as typed resources.**
//!
//! This crate keeps an in-memory registry of restaurants. Each restaurant carries a
//! menu of dishes, combos and drinks, a list of customer ratings and an on/off flag,
//! and the registry renders console listings of menus and of every restaurant.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Resources with Actions
//! A restaurant is a resource managed by a generic [`ResourceStore`](framework::ResourceStore):
//! - **Create**: registers a restaurant and hands back its [`RestaurantId`](model::RestaurantId).
//! - **Get**: read-only access for queries such as the average rating.
//! - **Action**: every mutation is a [`RestaurantAction`](restaurant_actor::RestaurantAction).
//!
//! There is no delete. The registry is append-only and keeps creation order, which is
//! also the order (and the 1-based numbering) of the restaurant listing.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Explicit Registry
//! The registry is a value, [`RestaurantDirectory`](lifecycle::RestaurantDirectory), created
//! by the caller and dropped at exit. Two directories never see each other's restaurants.
//!
//! ### 2. Tagged Menu Items
//! [`MenuItemKind`](model::MenuItemKind) is an enum; renderers match on it exhaustively to
//! pick the `Dish`, `Combo` or `Drink` line template.
//!
//! ### 3. Type-Safe Error Handling
//! Bad input is refused, not dropped: a score outside `[0, 5]` returns
//! [`RestaurantError::InvalidRating`](restaurant_actor::RestaurantError::InvalidRating) and a
//! malformed item returns
//! [`RestaurantError::InvalidMenuItem`](restaurant_actor::RestaurantError::InvalidMenuItem).
//! In both cases nothing is stored.
//!
//! ### 4. Observability
//! We use `tracing` with structured fields throughout. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic store, id allocation and action dispatch.
//! - **Key items**: [`Entity`](framework::Entity), [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Data ([`model`])
//! - **Role**: Plain data: [`Rating`](model::Rating), [`MenuItem`](model::MenuItem),
//!   [`Restaurant`](model::Restaurant).
//!
//! ### 3. The Implementation ([`restaurant_actor`])
//! - **Role**: Rating and menu rules, the `Entity` impl, and the console renderers.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Owns the registry and sets up logging.
//! - **Key items**: [`RestaurantDirectory`](lifecycle::RestaurantDirectory), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs on stderr
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod restaurant_actor;
