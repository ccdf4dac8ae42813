//! HTTP surface of the message board.
//!
//! | Method | Path             | Success                     |
//! |--------|------------------|-----------------------------|
//! | GET    | `/messages`      | 200, array oldest first     |
//! | POST   | `/messages`      | 201, created message        |
//! | PATCH  | `/messages/{id}` | 200, updated message        |
//! | DELETE | `/messages/{id}` | 204, empty body             |
//!
//! Failures are rendered by [`Error`]'s `IntoResponse` impl.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::entity::message;
use crate::error::{Error, Operation, Result};
use crate::schema::{MessagePatch, NewMessage};
use crate::store::MessageStore;

/// Builds the application router around `store`.
pub fn router(store: MessageStore) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/{id}", patch(update_message).delete(delete_message))
        .with_state(store)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn list_messages(State(store): State<MessageStore>) -> Result<Json<Vec<message::Model>>> {
    Ok(Json(store.list().await?))
}

async fn create_message(
    State(store): State<MessageStore>,
    payload: Result<Json<NewMessage>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(rejected(Operation::Create))?;
    let created = store.create(payload.validate()?).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_message(
    State(store): State<MessageStore>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MessagePatch>, JsonRejection>,
) -> Result<Json<message::Model>> {
    let Path(id) = id.map_err(|_| Error::NotFound)?;
    let changes = payload
        .map(|Json(changes)| changes)
        .map_err(rejected(Operation::Update));

    Ok(Json(store.update(id, changes).await?))
}

async fn delete_message(
    State(store): State<MessageStore>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode> {
    // non-integer ids cannot name a row
    let Path(id) = id.map_err(|_| Error::NotFound)?;
    store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn rejected(op: Operation) -> impl FnOnce(JsonRejection) -> Error {
    move |rejection| {
        tracing::debug!(operation = %op, %rejection, "rejected request payload");
        Error::MalformedPayload(op)
    }
}
