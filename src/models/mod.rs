// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, School, NewSchool, Ranked, RankedSchool};
pub use requests::{AddSchoolRequest, ListSchoolsQuery};
pub use responses::{AddSchoolResponse, ListSchoolsResponse, ErrorResponse};
