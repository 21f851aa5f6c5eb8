use axum::{
	extract::rejection::{JsonRejection, QueryRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;

use crate::domain::message::{
	entity::{MessageRecord, MessageView},
	ValidationError,
};

/// Body returned to clients for every failure that is not theirs to fix.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error, please try back later";

#[derive(Debug)]
pub enum ServiceResponse {
	Message(MessageRecord),
	View(MessageView),
	String(String),
	Empty(()),
}

impl From<MessageRecord> for ServiceResponse {
	fn from(value: MessageRecord) -> Self {
		ServiceResponse::Message(value)
	}
}

impl From<MessageView> for ServiceResponse {
	fn from(value: MessageView) -> Self {
		ServiceResponse::View(value)
	}
}

impl From<String> for ServiceResponse {
	fn from(value: String) -> Self {
		ServiceResponse::String(value)
	}
}

impl From<()> for ServiceResponse {
	fn from(_value: ()) -> Self {
		ServiceResponse::Empty(())
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Message(record) => (StatusCode::OK, Json(record)).into_response(),
			ServiceResponse::View(view) => (StatusCode::OK, Json(view)).into_response(),
			ServiceResponse::String(text) => (StatusCode::OK, text).into_response(),
			ServiceResponse::Empty(()) => StatusCode::OK.into_response(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("No matching record found with provided code")]
	EntityNotFound,
	#[error("No messages in database")]
	NoMessages,
	/// A request the extractors could not read; keeps the extractor's status.
	#[error("{1}")]
	Rejected(StatusCode, String),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),
	#[error("mail error: {0}")]
	Mail(String),
	#[error("no unused code found after {0} attempts")]
	CodeExhausted(usize),
	#[error("configuration error: {0}")]
	Config(String),
	#[error("server error: {0}")]
	Server(#[from] std::io::Error),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
			ServiceError::EntityNotFound | ServiceError::NoMessages => StatusCode::NOT_FOUND,
			ServiceError::Rejected(status, _) => *status,
			ServiceError::Database(_)
			| ServiceError::Migration(_)
			| ServiceError::Mail(_)
			| ServiceError::CodeExhausted(_)
			| ServiceError::Config(_)
			| ServiceError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<JsonRejection> for ServiceError {
	fn from(rejection: JsonRejection) -> Self {
		ServiceError::Rejected(rejection.status(), rejection.body_text())
	}
}

impl From<QueryRejection> for ServiceError {
	fn from(rejection: QueryRejection) -> Self {
		ServiceError::Rejected(rejection.status(), rejection.body_text())
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let message = if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
			INTERNAL_ERROR_MESSAGE.to_string()
		} else {
			self.to_string()
		};
		(status, Json(json!({ "error": message }))).into_response()
	}
}
