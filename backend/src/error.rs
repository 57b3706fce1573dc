//! Error types and error handling for the application
//!
//! This module defines the error type returned by every HTTP handler.
//! All errors implement `IntoResponse` so handlers can use `?` freely.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Callers only see the HTTP status and a short message. Store failures are
/// logged with their full detail and answered with the generic `context`.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field or query parameter is missing
    #[error("{0}")]
    Validation(String),

    /// The record addressed by a natural key does not exist
    #[error("{0}")]
    NotFound(String),

    /// The write collides with an existing record (e.g. an already booked slot)
    #[error("{0}")]
    Conflict(String),

    /// A query, insert or update failed in the store
    #[error("{context}")]
    Database {
        /// Message returned to the caller
        context: String,
        /// Underlying store failure, only logged
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the message the caller should see
    pub fn database(context: impl Into<String>, source: StoreError) -> Self {
        AppError::Database {
            context: context.into(),
            source,
        }
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message) => (status, message).into_response(),
            AppError::Database { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (status, Json(json!({ "message": context }))).into_response()
            }
        }
    }
}
