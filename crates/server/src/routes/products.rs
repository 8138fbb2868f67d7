use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use models::product::Model as Product;
use service::product::{NameQuery, PriceRange, ProductInput};

use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.create(input).await?))
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

/// `PUT /api/products/:id`: only name and price are taken from the body.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.update(id, input).await?))
}

/// `DELETE /api/products/:id`: 200 with an empty body.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/products/search?name=`
pub async fn search_products(
    State(state): State<AppState>,
    Query(q): Query<NameQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.search_by_name(&q.name).await?))
}

/// `GET /api/products/price-range?min=&max=`
pub async fn products_in_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRange>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.search_by_price(range).await?))
}
