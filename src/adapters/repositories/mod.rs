pub(crate) mod message_repository;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::{
	domain::message::entity::{MessageRecord, MessageView},
	services::response::ServiceError,
};

pub use message_repository::PgMessageRepository;

/// Storage seam for the `"Message"` table. Every method maps to a single
/// statement; callers decide what an empty result means.
#[async_trait]
pub trait MessageRepository: Send + Sync {
	/// Oldest stored message, if any.
	async fn first(&self) -> Result<Option<MessageRecord>, ServiceError>;

	async fn find_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageView>, ServiceError>;

	/// Removes the row and hands it back.
	async fn delete_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageRecord>, ServiceError>;

	/// Returns the number of rows touched.
	async fn set_reply(
		&self,
		code: &str,
		reply: &str,
	) -> Result<u64, ServiceError>;

	async fn mark_reply_seen(
		&self,
		code: &str,
	) -> Result<u64, ServiceError>;

	async fn code_exists(
		&self,
		code: &str,
	) -> Result<bool, ServiceError>;

	async fn insert(
		&self,
		record: &MessageRecord,
	) -> Result<(), ServiceError>;
}
