//! HTTP API: маршрутизация и состояние приложения.

pub mod cafe_routes;
pub mod params;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Общее состояние приложения.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub api_key: String,
}

/// Построить маршрутизатор Axum.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .merge(cafe_routes::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — статическая стартовая страница.
async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
