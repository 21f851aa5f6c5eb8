use serde::{Deserialize, Serialize};

// Required strings default to empty so a missing field surfaces as the
// matching validation message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AddMessage {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub receiver_name: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub receive_reply: bool,
	#[serde(default)]
	pub has_been_read: bool,
	#[serde(default)]
	pub message_reply: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeQuery {
	pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddReply {
	pub code: String,
	pub reply: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetReply {
	pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReceiverEmail {
	pub email: String,
	pub code: String,
}

#[test]
fn test_add_message_defaults() {
	let payload = serde_json::from_str::<AddMessage>(r#"{"title":"Hi","message":"there"}"#).unwrap();
	assert_eq!(payload.receiver_name, "");
	assert!(!payload.receive_reply);
	assert!(!payload.has_been_read);
	assert_eq!(payload.message_reply, None);
}
