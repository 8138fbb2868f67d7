use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use crate::state::AppState;

pub mod cookie;
pub mod home;
pub mod products;

/// Build the full application router: product CRUD, cookie demo, root payload,
/// and optionally a static frontend for every unmatched path.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: Option<&str>) -> Router {
    let product_routes = Router::new()
        .route("/api/products", get(products::list_products).post(products::create_product))
        .route("/api/products/search", get(products::search_products))
        .route("/api/products/price-range", get(products::products_in_price_range))
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let demo_routes = Router::new()
        .route("/", get(home::home))
        .route("/api/cookie", get(cookie::set_cookie))
        .route("/api/cookie/read", get(cookie::read_cookie));

    let mut app = product_routes.merge(demo_routes);
    if let Some(dir) = frontend_dir {
        let index = format!("{}/index.html", dir.trim_end_matches('/'));
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
