use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
	domain::message::entity::{MessageRecord, MessageView},
	services::response::ServiceError,
};

use super::MessageRepository;

const SELECT_COLUMNS: &str =
	"title, receiver_name, message, code, receive_reply, has_been_read, time_submitted, message_reply, sentiment_analysis";

#[derive(Clone)]
pub struct PgMessageRepository {
	pool: PgPool,
}

impl PgMessageRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
	async fn first(&self) -> Result<Option<MessageRecord>, ServiceError> {
		let record = sqlx::query_as::<_, MessageRecord>(&format!(
			r#"SELECT {SELECT_COLUMNS} FROM "Message" ORDER BY time_submitted LIMIT 1"#
		))
		.fetch_optional(&self.pool)
		.await?;
		Ok(record)
	}

	async fn find_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageView>, ServiceError> {
		let view = sqlx::query_as::<_, MessageView>(r#"SELECT message, message_reply FROM "Message" WHERE code = $1"#)
			.bind(code)
			.fetch_optional(&self.pool)
			.await?;
		Ok(view)
	}

	async fn delete_by_code(
		&self,
		code: &str,
	) -> Result<Option<MessageRecord>, ServiceError> {
		let record = sqlx::query_as::<_, MessageRecord>(&format!(
			r#"DELETE FROM "Message" WHERE code = $1 RETURNING {SELECT_COLUMNS}"#
		))
		.bind(code)
		.fetch_optional(&self.pool)
		.await?;
		Ok(record)
	}

	async fn set_reply(
		&self,
		code: &str,
		reply: &str,
	) -> Result<u64, ServiceError> {
		let result = sqlx::query(r#"UPDATE "Message" SET message_reply = $1 WHERE code = $2"#)
			.bind(reply)
			.bind(code)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected())
	}

	async fn mark_reply_seen(
		&self,
		code: &str,
	) -> Result<u64, ServiceError> {
		let result = sqlx::query(r#"UPDATE "Message" SET receive_reply = true WHERE code = $1"#)
			.bind(code)
			.execute(&self.pool)
			.await?;
		Ok(result.rows_affected())
	}

	async fn code_exists(
		&self,
		code: &str,
	) -> Result<bool, ServiceError> {
		let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM "Message" WHERE code = $1)"#)
			.bind(code)
			.fetch_one(&self.pool)
			.await?;
		Ok(exists)
	}

	async fn insert(
		&self,
		record: &MessageRecord,
	) -> Result<(), ServiceError> {
		sqlx::query(
			r#"INSERT INTO "Message" (title, receiver_name, message, code, receive_reply, has_been_read, time_submitted, message_reply, sentiment_analysis)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
		)
		.bind(&record.title)
		.bind(&record.receiver_name)
		.bind(&record.message)
		.bind(&record.code)
		.bind(record.receive_reply)
		.bind(record.has_been_read)
		.bind(record.time_submitted)
		.bind(&record.message_reply)
		.bind(record.sentiment_analysis.as_str())
		.execute(&self.pool)
		.await?;
		Ok(())
	}
}
