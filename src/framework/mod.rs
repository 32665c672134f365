//! Generic framework for resource management.
//!
//! This module provides the building blocks for managing collections of typed
//! resource entities with creation, lookup and custom actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic append-only store that owns entities
//! - [`FrameworkError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use core::*;
