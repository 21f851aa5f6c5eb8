mod home;

use axum::{
	routing::{delete, get, post},
	Router,
};

use crate::{dependencies::Dependency, services::handlers::MessageHandler};

use self::home::index;

pub fn create_routes(dependency: Dependency) -> Router {
	Router::new()
		.route("/", get(index))
		.route("/getallmessages", get(MessageHandler::get_all_messages))
		.route("/getmessage", get(MessageHandler::get_message))
		.route("/deletemessage", delete(MessageHandler::delete_message))
		.route("/addMessage", post(MessageHandler::add_message))
		.route("/addReply", post(MessageHandler::add_reply))
		.route("/setReply", post(MessageHandler::set_reply))
		.route("/receiverEmail", post(MessageHandler::receiver_email))
		.with_state(dependency)
}
