use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SESSION_HEADER: &str = "x-session-id";

/// Anonymous session identity. There is no authentication backend; the
/// session id stands in for the user (it is also the bidder id on bids).
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SessionAuth {
    pub session_id: Uuid,
}

/// Reads the `x-session-id` header, minting a fresh id when the client
/// does not present a valid one, and echoes it back on the response so
/// the client can keep it for subsequent requests.
pub async fn session(mut req: Request, next: Next) -> Response {
    let session_id = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(|| {
            let minted = Uuid::new_v4();
            tracing::debug!("Minted session id {}", minted);
            minted
        });

    req.extensions_mut().insert(SessionAuth { session_id });

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(SESSION_HEADER), value);
    }

    response
}
