// domain for anonymous feedback messages
pub mod code;
pub mod entity;
pub mod schemas;
pub mod sentiment;

pub use entity::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("The title cannot be empty.")]
	EmptyTitle,
	#[error("The intended Receiver cannot be empty.")]
	EmptyReceiver,
	#[error("The message cannot be empty.")]
	EmptyMessage,
	#[error("The email address is not valid.")]
	InvalidEmail,
}

/// Accepts `local@domain` where neither part is empty, the domain has a dot,
/// and nothing could be read as a command-line option or split into extra
/// arguments by a mail program.
pub fn recipient(email: &str) -> Result<&str, ValidationError> {
	let email = email.trim();
	if email.starts_with('-') || email.chars().any(|c| c.is_whitespace() || c.is_control()) {
		return Err(ValidationError::InvalidEmail);
	}
	match email.split_once('@') {
		Some((local, domain))
			if !local.is_empty()
				&& !domain.contains('@')
				&& domain.contains('.')
				&& !domain.starts_with(['-', '.'])
				&& !domain.ends_with('.') =>
		{
			Ok(email)
		}
		_ => Err(ValidationError::InvalidEmail),
	}
}
