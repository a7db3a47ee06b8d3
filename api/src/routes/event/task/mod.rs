mod create_task;
mod list_tasks;
mod update_task;

use axum::Router;

pub use self::{create_task::*, list_tasks::*, update_task::*};
use crate::prelude::*;

/// Sets up the task routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(create_task, state)
		.mount_auth_endpoint(list_tasks, state)
		.mount_auth_endpoint(update_task, state)
}
