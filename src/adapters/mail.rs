use std::{io::ErrorKind, process::Stdio, sync::Arc};

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command, task::JoinHandle};

use crate::{config::Config, services::response::ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
	pub recipient: String,
	pub subject: String,
	pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
	async fn send(
		&self,
		mail: Mail,
	) -> Result<(), ServiceError>;
}

/// Where notifications go and what they link back to.
#[derive(Debug, Clone, Default)]
pub struct MailSettings {
	pub receiver_email: Option<String>,
	pub site_url: String,
}

impl From<&Config> for MailSettings {
	fn from(config: &Config) -> Self {
		Self {
			receiver_email: config.receiver_email.clone(),
			site_url: config.site_url.clone(),
		}
	}
}

/// Hands mail to a local `mail(1)`-style program: `<program> -s <subject> -- <recipient>`
/// with the body on stdin. The `--` keeps the recipient from being parsed as an option.
#[derive(Debug, Clone)]
pub struct CommandMailer {
	program: String,
}

impl CommandMailer {
	pub fn new(program: impl Into<String>) -> Self {
		Self { program: program.into() }
	}
}

#[async_trait]
impl Mailer for CommandMailer {
	async fn send(
		&self,
		mail: Mail,
	) -> Result<(), ServiceError> {
		let mut child = Command::new(&self.program)
			.arg("-s")
			.arg(&mail.subject)
			.arg("--")
			.arg(&mail.recipient)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::piped())
			.spawn()
			.map_err(|err| ServiceError::Mail(format!("failed to spawn `{}`: {err}", self.program)))?;

		if let Some(mut stdin) = child.stdin.take() {
			// A program that exits without reading is judged by its exit status below.
			match stdin.write_all(mail.body.as_bytes()).await {
				Err(err) if err.kind() != ErrorKind::BrokenPipe => {
					return Err(ServiceError::Mail(format!("failed to write body: {err}")));
				}
				_ => {}
			}
		}

		let output = child
			.wait_with_output()
			.await
			.map_err(|err| ServiceError::Mail(format!("failed to wait for `{}`: {err}", self.program)))?;
		if !output.status.success() {
			return Err(ServiceError::Mail(format!(
				"`{}` exited with {}: {}",
				self.program,
				output.status,
				String::from_utf8_lossy(&output.stderr).trim()
			)));
		}
		Ok(())
	}
}

/// Sends on a detached task so the caller never waits on delivery.
pub fn dispatch(
	mailer: Arc<dyn Mailer>,
	mail: Mail,
) -> JoinHandle<()> {
	tokio::spawn(async move {
		let recipient = mail.recipient.clone();
		match mailer.send(mail).await {
			Ok(()) => tracing::debug!(%recipient, "mail handed to transport"),
			Err(err) => tracing::error!(%recipient, error = %err, "mail delivery failed"),
		}
	})
}
