use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{sentiment::Sentiment, ValidationError};

/// A submission that passed the non-empty checks. Fields are kept verbatim.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
	pub title: String,
	pub receiver_name: String,
	pub message: String,
}

impl Message {
	/// Checks title, receiver and body in that order; the first empty one wins.
	pub fn new(
		title: impl Into<String>,
		receiver_name: impl Into<String>,
		message: impl Into<String>,
	) -> Result<Self, ValidationError> {
		let (title, receiver_name, message) = (title.into(), receiver_name.into(), message.into());
		if title.is_empty() {
			return Err(ValidationError::EmptyTitle);
		}
		if receiver_name.is_empty() {
			return Err(ValidationError::EmptyReceiver);
		}
		if message.is_empty() {
			return Err(ValidationError::EmptyMessage);
		}
		Ok(Self {
			title,
			receiver_name,
			message,
		})
	}
}

/// One row of the `"Message"` table.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, FromRow)]
pub struct MessageRecord {
	pub title: String,
	pub receiver_name: String,
	pub message: String,
	pub code: String,
	pub receive_reply: bool,
	pub has_been_read: bool,
	pub time_submitted: DateTime<Utc>,
	pub message_reply: Option<String>,
	#[sqlx(try_from = "String")]
	pub sentiment_analysis: Sentiment,
}

impl MessageRecord {
	pub fn view(&self) -> MessageView {
		MessageView {
			message: self.message.clone(),
			message_reply: self.message_reply.clone(),
		}
	}
}

/// What a code holder gets back: the original text and any reply.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, FromRow)]
pub struct MessageView {
	pub message: String,
	pub message_reply: Option<String>,
}
