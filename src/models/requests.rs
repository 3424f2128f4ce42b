use serde::Deserialize;
use serde_json::Value;

use crate::core::validation::{parse_coordinate, parse_query_coordinate, require_text, ValidationError};
use crate::models::domain::{Coordinates, NewSchool};

/// Raw body of `POST /addSchool`
///
/// Coordinates stay untyped here because clients send them both as numbers
/// and as numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddSchoolRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

impl AddSchoolRequest {
    /// Parse and validate into a school ready for storage
    pub fn into_new_school(self) -> Result<NewSchool, ValidationError> {
        let name = require_text("name", self.name)?;
        let address = require_text("address", self.address)?;
        let latitude = parse_coordinate("latitude", self.latitude.as_ref())?;
        let longitude = parse_coordinate("longitude", self.longitude.as_ref())?;

        NewSchool::new(&name, &address, latitude, longitude)
    }
}

/// Raw query of `GET /listSchools?lat=..&lng=..`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSchoolsQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl ListSchoolsQuery {
    /// The search origin. Only finiteness is checked, not range.
    pub fn origin(&self) -> Result<Coordinates, ValidationError> {
        let latitude = parse_query_coordinate("lat", self.lat.as_deref())?;
        let longitude = parse_query_coordinate("lng", self.lng.as_deref())?;
        Ok(Coordinates::new(latitude, longitude))
    }
}
