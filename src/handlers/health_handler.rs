use actix_web::{get, HttpResponse};

use crate::models::dto::response::ServiceDescription;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceDescription {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: "Generates study flashcards and multiple-choice quizzes from a topic",
        endpoints: vec![
            "GET / - This description",
            "GET /health - Health check",
            "POST /generate-cards - {\"topic\": string, \"count\"?: number}",
            "POST /generate-quiz - {\"topic\": string, \"numQuestions\"?: number}",
        ],
    })
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
