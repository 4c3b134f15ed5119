use std::sync::Arc;
use axum::{response::IntoResponse, routing::{get, post}, Extension, Json, Router};
use validator::Validate;

use crate::{
    dtos::chatdtos::SendChatMessageDto,
    error::HttpError,
    models::chatmodel::ChatMessage,
    service::chatbot::GREETING,
    AppState,
};

pub fn chat_handler() -> Router {
    Router::new()
        .route("/greeting", get(get_greeting))
        .route("/messages", post(send_message))
}

/// Fixed opener shown when the widget is first expanded.
pub async fn get_greeting() -> Result<impl IntoResponse, HttpError> {
    let greeting = ChatMessage::from_assistant(GREETING);

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": { "message": greeting }
    })))
}

/// Stateless turn: classify the visitor message and answer with a canned
/// reply. No context is carried between turns.
pub async fn send_message(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<SendChatMessageDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let visitor_message = ChatMessage::from_visitor(body.content.trim());
    let reply = app_state.chatbot.reply(&visitor_message.content);
    let assistant_message = ChatMessage::from_assistant(reply);

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "message": visitor_message,
            "reply": assistant_message
        }
    })))
}
