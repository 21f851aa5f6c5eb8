use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
	domain::message::entity::{MessageRecord, MessageView},
	services::response::ServiceError,
};

use super::MessageRepository;

/// Vec-backed stand-in for the Postgres repository, insertion ordered.
#[derive(Default)]
pub struct InMemoryMessageRepository {
	rows: RwLock<Vec<MessageRecord>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
	async fn first(&self) -> Result<Option<MessageRecord>, ServiceError> {
		Ok(self.rows.read().await.first().cloned())
	}

	async fn find_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageView>, ServiceError> {
		Ok(self.rows.read().await.iter().find(|row| row.code == code).map(MessageRecord::view))
	}

	async fn delete_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageRecord>, ServiceError> {
		let mut rows = self.rows.write().await;
		Ok(rows.iter().position(|row| row.code == code).map(|index| rows.remove(index)))
	}

	async fn set_reply(
		&self,
		code: &str,
		reply: &str,
	) -> Result<u64, ServiceError> {
		let mut touched = 0;
		for row in self.rows.write().await.iter_mut().filter(|row| row.code == code) {
			row.message_reply = Some(reply.to_string());
			touched += 1;
		}
		Ok(touched)
	}

	async fn mark_reply_seen(
		&self,
		code: &str,
	) -> Result<u64, ServiceError> {
		let mut touched = 0;
		for row in self.rows.write().await.iter_mut().filter(|row| row.code == code) {
			row.receive_reply = true;
			touched += 1;
		}
		Ok(touched)
	}

	async fn code_exists(
		&self,
		code: &str,
	) -> Result<bool, ServiceError> {
		Ok(self.rows.read().await.iter().any(|row| row.code == code))
	}

	async fn insert(
		&self,
		record: &MessageRecord,
	) -> Result<(), ServiceError> {
		self.rows.write().await.push(record.clone());
		Ok(())
	}
}
