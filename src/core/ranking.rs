use crate::core::distance::distance_between;
use crate::models::{Coordinates, Ranked};

/// Anything that sits at a point on the globe
pub trait Located {
    fn coordinates(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn coordinates(&self) -> Coordinates {
        *self
    }
}

/// Rank points by their great-circle distance from `origin`, nearest first
///
/// Every input point appears exactly once in the output. The sort is stable,
/// so points at equal distance keep their input order.
pub fn rank_by_distance<T: Located>(origin: Coordinates, points: Vec<T>) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = points
        .into_iter()
        .map(|item| {
            let distance = distance_between(origin, item.coordinates());
            Ranked { item, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    ranked
}
