mod list_notifications;
mod mark_notification_read;

use axum::Router;

pub use self::{list_notifications::*, mark_notification_read::*};
use crate::prelude::*;

/// Sets up the notification routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(list_notifications, state)
		.mount_auth_endpoint(mark_notification_read, state)
}
