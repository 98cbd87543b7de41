use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{Flashcards, Quiz},
        dto::{
            request::{GenerateCardsRequestDto, GenerateQuizRequestDto},
            response::{CardsResponse, QuizResponse},
        },
    },
};

#[post("/generate-cards")]
pub async fn generate_cards(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateCardsRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    let cards = state
        .generation_service
        .generate::<Flashcards>(request.into_inner().into(), &request_id)
        .await?;
    Ok(HttpResponse::Ok().json(CardsResponse { cards }))
}

#[post("/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    let questions = state
        .generation_service
        .generate::<Quiz>(request.into_inner().into(), &request_id)
        .await?;
    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}
