//! School Locator - register schools and list them nearest-first
//!
//! The interesting part is the distance ranking in [`core`]: a haversine
//! great-circle distance and a stable nearest-first sort. Everything else is
//! validation at the HTTP boundary and a single-table store.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, rank_by_distance, Located, ValidationError};
pub use error::ApiError;
pub use models::{Coordinates, School, NewSchool, Ranked, RankedSchool};
pub use services::{SchoolStore, StoreError};
