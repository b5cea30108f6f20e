use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::validate_jwt;
use crate::context::ActorContext;
use crate::error::ApiError;

/// Opens a unit of work for the request: validates the bearer token and runs
/// the rest of the stack inside `ActorContext::scope` with the token's actor.
/// The actor is released when the response future completes.
pub async fn actor_context_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(ApiError::unauthorized)?;

    let claims = validate_jwt(&token).map_err(|e| {
        tracing::warn!("Rejected request to {}: {}", request.uri().path(), e);
        ApiError::from(e)
    })?;

    tracing::debug!("Actor {} bound to {} {}", claims.actor_id, request.method(), request.uri().path());

    Ok(ActorContext::scope(Some(claims.actor_id), next.run(request)).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
