use serde::{Deserialize, Serialize};
use crate::models::domain::RankedSchool;

/// Response for the add school endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AddSchoolResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: i64,
}

/// Response for the list schools endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ListSchoolsResponse {
    pub success: bool,
    pub count: usize,
    pub schools: Vec<RankedSchool>,
}

impl ListSchoolsResponse {
    pub fn new(schools: Vec<RankedSchool>) -> Self {
        Self {
            success: true,
            count: schools.len(),
            schools,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
