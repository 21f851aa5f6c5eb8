use axum::{
	extract::{
		rejection::{JsonRejection, QueryRejection},
		Query, State,
	},
	Json,
};
use chrono::Utc;

use crate::{
	adapters::{
		mail::{dispatch, Mail},
		repositories::MessageRepository,
	},
	common::sanitize,
	dependencies::Dependency,
	domain::message::{
		code::{generate_code, MAX_CODE_ATTEMPTS},
		entity::MessageRecord,
		recipient,
		schemas::{AddMessage, AddReply, CodeQuery, ReceiverEmail, SetReply},
		Message,
	},
};

use super::response::{ServiceError, ServiceResponse};

// Extractors are taken as `Result` so their rejections go through
// `ServiceError` and keep the `{"error": ..}` body shape.
pub struct MessageHandler;
impl MessageHandler {
	pub async fn get_all_messages(State(dependency): State<Dependency>) -> Result<ServiceResponse, ServiceError> {
		let record = dependency.repository.first().await?.ok_or(ServiceError::NoMessages)?;
		Ok(record.into())
	}

	pub async fn get_message(
		State(dependency): State<Dependency>,
		query: Result<Query<CodeQuery>, QueryRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Query(CodeQuery { code }) = query?;
		let view = dependency.repository.find_by_code(&code).await?.ok_or(ServiceError::EntityNotFound)?;
		Ok(view.into())
	}

	pub async fn delete_message(
		State(dependency): State<Dependency>,
		query: Result<Query<CodeQuery>, QueryRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Query(CodeQuery { code }) = query?;
		let record = dependency.repository.delete_by_code(&code).await?.ok_or(ServiceError::EntityNotFound)?;
		tracing::info!(%code, "message deleted");
		Ok(record.into())
	}

	pub async fn add_reply(
		State(dependency): State<Dependency>,
		payload: Result<Json<AddReply>, JsonRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Json(AddReply { code, reply }) = payload?;
		if dependency.repository.set_reply(&code, &reply).await? == 0 {
			return Err(ServiceError::EntityNotFound);
		}
		Ok(().into())
	}

	pub async fn set_reply(
		State(dependency): State<Dependency>,
		payload: Result<Json<SetReply>, JsonRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Json(SetReply { code }) = payload?;
		if dependency.repository.mark_reply_seen(&code).await? == 0 {
			return Err(ServiceError::EntityNotFound);
		}
		Ok(().into())
	}

	/// Sends the sender a copy of their code.
	pub async fn receiver_email(
		State(dependency): State<Dependency>,
		payload: Result<Json<ReceiverEmail>, JsonRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Json(ReceiverEmail { email, code }) = payload?;
		let mail = Mail {
			recipient: recipient(&email)?.to_string(),
			subject: "SAFE- This is a copy of your Code".to_string(),
			body: format!(
				"Here is a copy of your unique code: {code}\nPlease check back later on the website for a reply. {}",
				dependency.mail_settings.site_url
			),
		};
		dispatch(dependency.mailer.clone(), mail);
		Ok(String::from("Your code has been sent to the email you provided").into())
	}

	/// Validates and stores a submission, notifies the receiver, and answers
	/// with the retrieval code as plain text.
	///
	/// Message and reply text are stored as typed; only the title is filtered.
	pub async fn add_message(
		State(dependency): State<Dependency>,
		payload: Result<Json<AddMessage>, JsonRejection>,
	) -> Result<ServiceResponse, ServiceError> {
		let Json(payload) = payload?;
		let message = Message::new(sanitize::title(&payload.title), payload.receiver_name, payload.message)?;
		let sentiment = dependency.classifier.classify(&message.message);
		let code = MessageHandler::issue_code(dependency.repository.as_ref()).await?;

		let record = MessageRecord {
			title: message.title,
			receiver_name: message.receiver_name,
			message: message.message,
			code: code.clone(),
			receive_reply: payload.receive_reply,
			has_been_read: payload.has_been_read,
			time_submitted: Utc::now(),
			message_reply: payload.message_reply.filter(|reply| !reply.is_empty()),
			sentiment_analysis: sentiment,
		};
		dependency.repository.insert(&record).await?;
		tracing::info!(%code, sentiment = %sentiment, "message stored");

		match &dependency.mail_settings.receiver_email {
			Some(receiver_email) => {
				dispatch(
					dependency.mailer.clone(),
					Mail {
						recipient: receiver_email.clone(),
						subject: format!("SAFE: \"{}\"", record.title),
						body: record.message,
					},
				);
			}
			None => tracing::warn!(%code, "RECEIVER_EMAIL is not set, skipping notification"),
		}

		Ok(code.into())
	}

	pub(crate) async fn issue_code(repository: &dyn MessageRepository) -> Result<String, ServiceError> {
		for attempt in 1..=MAX_CODE_ATTEMPTS {
			let candidate = generate_code(&mut rand::thread_rng());
			if !repository.code_exists(&candidate).await? {
				return Ok(candidate);
			}
			tracing::debug!(attempt, "code collision, drawing again");
		}
		Err(ServiceError::CodeExhausted(MAX_CODE_ATTEMPTS))
	}
}
