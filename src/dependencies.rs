use std::sync::Arc;

use sqlx::PgPool;

use crate::{
	adapters::{
		mail::{CommandMailer, MailSettings, Mailer},
		repositories::{MessageRepository, PgMessageRepository},
	},
	config::Config,
	domain::message::sentiment::{LexiconClassifier, SentimentClassifier},
};

/// Everything a handler may reach for, built once at start-up and handed to
/// the router as state.
#[derive(Clone)]
pub struct Dependency {
	pub repository: Arc<dyn MessageRepository>,
	pub mailer: Arc<dyn Mailer>,
	pub classifier: Arc<dyn SentimentClassifier>,
	pub mail_settings: Arc<MailSettings>,
}

impl Dependency {
	pub fn new(
		pool: PgPool,
		config: &Config,
	) -> Self {
		Self {
			repository: Arc::new(PgMessageRepository::new(pool)),
			mailer: Arc::new(CommandMailer::new(config.mail_command.clone())),
			classifier: Arc::new(LexiconClassifier),
			mail_settings: Arc::new(MailSettings::from(config)),
		}
	}
}
