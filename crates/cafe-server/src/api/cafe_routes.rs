//! Маршруты для кафе: случайное, список, поиск, добавление, цена, удаление.

use crate::api::params::{CafeId, FormParams, QueryParams, RequestParams};
use crate::api::AppState;
use crate::config::verify_api_key;
use crate::error::AppError;
use crate::services::cafe_service::{self, NewCafe, LOCATION_NOT_FOUND};
use axum::extract::State;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use cafe_entities::cafes::Model;
use serde::Serialize;
use serde_json::{json, Value};

// ── Типы запросов/ответов ────────────────────────────────────────────────────

/// Кафе в ответе API: все одиннадцать колонок таблицы.
#[derive(Debug, Serialize)]
pub struct CafeResponse {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<Model> for CafeResponse {
    fn from(c: Model) -> Self {
        CafeResponse {
            id: c.id,
            name: c.name,
            map_url: c.map_url,
            img_url: c.img_url,
            location: c.location,
            seats: c.seats,
            has_toilet: c.has_toilet,
            has_wifi: c.has_wifi,
            has_sockets: c.has_sockets,
            can_take_calls: c.can_take_calls,
            coffee_price: c.coffee_price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub cafe: Vec<CafeResponse>,
}

/// Поля POST /addcafe. Обязательность строковых полей проверяет слой
/// хранения, флаги приводятся через [`is_truthy`].
impl From<&RequestParams> for NewCafe {
    fn from(form: &RequestParams) -> Self {
        let flag = |key: &str| is_truthy(form.first(key).as_deref());
        NewCafe {
            name: form.first("name"),
            map_url: form.first("map_url"),
            img_url: form.first("img_url"),
            location: form.first("location"),
            seats: form.first("seats"),
            has_toilet: flag("has_toilet"),
            has_wifi: flag("has_wifi"),
            has_sockets: flag("has_sockets"),
            can_take_calls: flag("can_take_calls"),
            coffee_price: form.first("coffee_price"),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/random", get(get_random))
        .route("/all", get(get_all))
        .route("/search", get(search))
        .route("/addcafe", post(add_cafe))
        .route("/updateprice/{cafe_id}", patch(update_price))
        .route("/deletecafe/{cafe_id}", delete(delete_cafe))
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /random — случайное кафе.
async fn get_random(State(state): State<AppState>) -> Result<Json<CafeResponse>, AppError> {
    let cafe = cafe_service::get_random(&state.db).await?;
    Ok(Json(cafe.into()))
}

/// GET /all — все кафе.
async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<CafeResponse>>, AppError> {
    let cafes = cafe_service::get_all(&state.db).await?;
    Ok(Json(cafes.into_iter().map(CafeResponse::from).collect()))
}

/// GET /search?location=X — кафе с точным совпадением location.
async fn search(
    State(state): State<AppState>,
    QueryParams(query): QueryParams,
) -> Result<Json<SearchResponse>, AppError> {
    let cafes = match query.first("location") {
        Some(location) => cafe_service::get_by_location(&state.db, &location).await?,
        None => Vec::new(),
    };

    if cafes.is_empty() {
        return Err(AppError::NotFound(LOCATION_NOT_FOUND.into()));
    }

    Ok(Json(SearchResponse {
        cafe: cafes.into_iter().map(CafeResponse::from).collect(),
    }))
}

/// POST /addcafe — добавить кафе из form-encoded тела.
async fn add_cafe(
    State(state): State<AppState>,
    FormParams(form): FormParams,
) -> Result<Json<Value>, AppError> {
    cafe_service::create(&state.db, NewCafe::from(&form)).await?;
    Ok(success("Successfully added the new cafe."))
}

/// PATCH /updateprice/{cafe_id}?price=P — обновить цену кофе.
async fn update_price(
    State(state): State<AppState>,
    CafeId(id): CafeId,
    QueryParams(query): QueryParams,
) -> Result<Json<Value>, AppError> {
    cafe_service::update_price(&state.db, id, query.first("price")).await?;
    Ok(success("Successfully edited the cafe details."))
}

/// DELETE /deletecafe/{cafe_id}?api-key=K — удалить кафе (требует общий секрет).
async fn delete_cafe(
    State(state): State<AppState>,
    CafeId(id): CafeId,
    QueryParams(query): QueryParams,
) -> Result<Json<Value>, AppError> {
    cafe_service::get_by_id(&state.db, id).await?;

    if !verify_api_key(query.first("api-key").as_deref(), &state.api_key) {
        tracing::warn!("Отклонено удаление кафе {id}: неверный api-key");
        return Err(AppError::PermissionDenied(
            "Sorry, you do not have the correct permissions.".into(),
        ));
    }

    cafe_service::delete(&state.db, id).await?;
    Ok(success("Successfully deleted the cafe."))
}

// ── Вспомогательные функции ──────────────────────────────────────────────────

fn success(message: &str) -> Json<Value> {
    Json(json!({ "response": { "success": message } }))
}

/// Любое непустое значение формы — true, в том числе "False".
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
