use axum::Json;
use common::types::Message;

pub const GREETING: Message = Message { message: "Hello from Spring Boot!" };

/// `GET /`: fixed JSON greeting, `application/json`.
pub async fn home() -> Json<Message> {
    Json(GREETING)
}
