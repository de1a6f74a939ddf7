//! Read-only HTTP surface: one endpoint serving the normalized collection.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::data_backend::kochwerk_fetcher::get_all_detailed_meals;
use crate::data_types::{DetailedMeal, MealsError};

pub fn router() -> Router {
    Router::new().route("/meals", get(meals_handler))
}

pub async fn run_server(port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Listening on 0.0.0.0:{}", port);

    axum::serve(listener, router()).await?;
    Ok(())
}

/// Full fetch-and-normalize cycle per request, no caching.
async fn meals_handler() -> Result<Json<Vec<DetailedMeal>>, AppError> {
    let meals = get_all_detailed_meals().await?;
    Ok(Json(meals))
}

struct AppError(MealsError);

impl From<MealsError> for AppError {
    fn from(err: MealsError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let stage = match self.0 {
            MealsError::TokenUnavailable => "token",
            MealsError::FetchFailed(_) => "fetch",
        };
        log::error!(target: "kochwerk_meals_rs::server", "meal retrieval failed at {} stage: {}", stage, self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch meals" })),
        )
            .into_response()
    }
}
