use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::shopping_carts::use_cases::dispatch_command::handler::{
    DispatchError, DispatchResult,
};
use crate::shared::core::etag::{self, ETagError};
use crate::shared::core::validation::ValidationError;

/// Whether the route creates the stream or mutates an existing one. Each
/// route passes its kind explicitly; the acknowledgement shape never depends
/// on which route happened to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    Mutate,
}

/// Transport acknowledgement for a successful dispatch. Every variant
/// carries the concurrency token for the stream's new version.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandAck {
    Created { shopping_cart_id: String, etag: String },
    NoContent { etag: String },
}

pub fn project(
    kind: OperationKind,
    shopping_cart_id: &str,
    result: &DispatchResult,
) -> CommandAck {
    let etag = etag::encode(result.version);
    match kind {
        OperationKind::Create => CommandAck::Created {
            shopping_cart_id: shopping_cart_id.to_string(),
            etag,
        },
        OperationKind::Mutate => CommandAck::NoContent { etag },
    }
}

#[derive(Serialize)]
struct CreatedBody {
    shopping_cart_id: String,
}

impl IntoResponse for CommandAck {
    fn into_response(self) -> Response {
        match self {
            CommandAck::Created { shopping_cart_id, etag } => (
                StatusCode::CREATED,
                [(header::ETAG, etag)],
                Json(CreatedBody { shopping_cart_id }),
            )
                .into_response(),
            CommandAck::NoContent { etag } => {
                (StatusCode::NO_CONTENT, [(header::ETAG, etag)]).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] ETagError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Precondition(_) => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(DispatchError::Conflict(_)) => StatusCode::PRECONDITION_FAILED,
            ApiError::Dispatch(DispatchError::Domain(_)) => StatusCode::CONFLICT,
            ApiError::Dispatch(DispatchError::Store(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Dispatch(DispatchError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        }
        (status, Json(ErrorBody { message })).into_response()
    }
}
