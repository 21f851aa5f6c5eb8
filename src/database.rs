use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::{config::Config, services::response::ServiceError};

pub async fn connection_pool(config: &Config) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new()
		.max_connections(config.db_max_connections)
		.connect(&config.database_url)
		.await
		.map_err(|err| {
			tracing::error!("Database connection error : {:?}", err);
			ServiceError::Database(err)
		})?;
	Ok(pool)
}

/// Creates the `"Message"` table if this database has never seen it.
pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	Ok(())
}
