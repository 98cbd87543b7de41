pub mod generation_handler;
pub mod health_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use generation_handler::{generate_cards, generate_quiz};
pub use health_handler::{health_check, index};

/// Registers every route, including the `/api`-prefixed generation routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(index)
        .service(health_check)
        .service(generate_cards)
        .service(generate_quiz)
        .service(web::scope("/api").service(generate_cards).service(generate_quiz));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    AppError::InvalidInput("request body must be a JSON object".to_string()).into()
}
