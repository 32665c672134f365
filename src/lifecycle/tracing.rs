//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber for the whole crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. Log lines go to
//! stderr so they never interleave with the listings printed to stdout.
//!
//! ```bash
//! # Creations and accepted actions
//! RUST_LOG=info cargo run
//!
//! # Full payloads (create params, actions, lookups)
//! RUST_LOG=debug cargo run
//!
//! # Only the store
//! RUST_LOG=restaurant_recipe::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Entity Operations**: Create, Get and custom Actions, tagged with `entity_type` and `id`
//! - **Rejections**: out-of-range ratings and malformed menu items at `WARN`
//! - **Directory calls**: one span per [`RestaurantDirectory`](crate::lifecycle::RestaurantDirectory) method
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create_restaurant: Created entity_type="Restaurant" id=restaurant_1 size=1
//! INFO receive_rating: Action ok entity_type="Restaurant" id=restaurant_1
//! WARN receive_rating: Rating rejected restaurant="Burger King" score=9.0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
