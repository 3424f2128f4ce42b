// Route exports
pub mod schools;

use actix_web::web;

pub use schools::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(schools::configure);
}
