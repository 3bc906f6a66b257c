//! JSON body extractor
//!
//! Same as `axum::Json`, but a body that fails to parse (bad syntax, wrong
//! field type, missing content type) answers with the unified error body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::core::ServerState;
use crate::utils::AppError;

pub struct AppJson<T>(pub T);

impl<T> FromRequest<ServerState> for AppJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &ServerState) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected JSON body");
    AppError::invalid_request("Requisição inválida.").with_detail("reason", rejection.body_text())
}
