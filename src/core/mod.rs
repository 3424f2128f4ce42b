// Core algorithm exports
pub mod distance;
pub mod ranking;
pub mod validation;

pub use distance::{haversine_distance, distance_between};
pub use ranking::{rank_by_distance, Located};
pub use validation::{ValidationError, parse_coordinate, parse_query_coordinate, require_text, trim_text};
