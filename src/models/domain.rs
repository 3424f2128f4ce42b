use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::ranking::Located;
use crate::core::validation::{trim_text, ValidationError};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A stored school
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Located for School {
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A school that passed validation and may be persisted
///
/// The only way to build one is [`NewSchool::new`], so every value of this
/// type has trimmed, non-empty text and in-range coordinates.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewSchool {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    address: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    longitude: f64,
}

impl NewSchool {
    pub fn new(
        name: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let school = Self {
            name: trim_text(name).to_string(),
            address: trim_text(address).to_string(),
            latitude,
            longitude,
        };

        // Range rules let NaN through
        if !latitude.is_finite() {
            return Err(ValidationError::NotANumber("latitude"));
        }
        if !longitude.is_finite() {
            return Err(ValidationError::NotANumber("longitude"));
        }

        school.validate()?;
        Ok(school)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Attach the identifier the store assigned on insert
    pub fn with_id(self, id: i64) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// An item annotated with its distance in kilometers from a query origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance: f64,
}

/// A school with its distance from the caller
pub type RankedSchool = Ranked<School>;
