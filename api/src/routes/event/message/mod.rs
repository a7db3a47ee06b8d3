mod list_event_messages;
mod post_event_message;

use axum::Router;

pub use self::{list_event_messages::*, post_event_message::*};
use crate::prelude::*;

/// Sets up the organizer message board routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(list_event_messages, state)
		.mount_auth_endpoint(post_event_message, state)
}
