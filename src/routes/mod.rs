// Route exports
pub mod feed;

use actix_web::web;

pub use feed::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(feed::configure),
    );
}
