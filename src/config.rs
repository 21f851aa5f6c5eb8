use std::{fmt::Display, str::FromStr};

use crate::services::response::ServiceError;

pub struct Config {
	/// Which errors we want to log, when `RUST_LOG` is not set
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub db_max_connections: u32,
	pub allow_origins: String,

	/// Inbox that gets notified of every new message
	pub receiver_email: Option<String>,
	pub mail_command: String,
	pub site_url: String,
	pub request_timeout_secs: u64,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		let log_level = std::env::var("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = std::env::var("SERVER_IP_PORT").unwrap_or("0.0.0.0:3004".into());
		let database_url =
			std::env::var("DATABASE_URL").map_err(|_| ServiceError::Config("DATABASE_URL must be set!".to_string()))?;
		let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 30)?;
		let allow_origins = std::env::var("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:3001".to_string());
		let receiver_email = std::env::var("RECEIVER_EMAIL").ok().filter(|email| !email.trim().is_empty());
		let mail_command = std::env::var("MAIL_COMMAND").unwrap_or("mail".to_string());
		let site_url = std::env::var("SITE_URL").unwrap_or("https://feedback.cs.pdx.edu".to_string());
		let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30)?;

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			db_max_connections,
			allow_origins,
			receiver_email,
			mail_command,
			site_url,
			request_timeout_secs,
		})
	}
}

fn parse_var<T>(
	key: &str,
	default: T,
) -> Result<T, ServiceError>
where
	T: FromStr,
	T::Err: Display,
{
	match std::env::var(key) {
		Ok(raw) => raw
			.trim()
			.parse()
			.map_err(|err| ServiceError::Config(format!("{key} is not valid: {err}"))),
		Err(_) => Ok(default),
	}
}

#[cfg(test)]
mod test {
	use super::parse_var;

	#[test]
	fn test_parse_var_falls_back_to_default() {
		assert_eq!(parse_var::<u32>("SAFE_MESSAGE_TEST_UNSET_VAR", 30).unwrap(), 30);
	}

	#[test]
	fn test_parse_var_rejects_garbage() {
		std::env::set_var("SAFE_MESSAGE_TEST_BAD_VAR", "thirty");
		let err = parse_var::<u32>("SAFE_MESSAGE_TEST_BAD_VAR", 30).unwrap_err();
		assert!(err.to_string().contains("SAFE_MESSAGE_TEST_BAD_VAR"));
	}

	#[test]
	fn test_parse_var_reads_value() {
		std::env::set_var("SAFE_MESSAGE_TEST_GOOD_VAR", " 12 ");
		assert_eq!(parse_var::<u64>("SAFE_MESSAGE_TEST_GOOD_VAR", 30).unwrap(), 12);
	}
}
