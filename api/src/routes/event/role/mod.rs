mod add_event_role;
mod list_event_roles;
mod remove_event_role;

use axum::Router;

pub use self::{
	add_event_role::*,
	list_event_roles::*,
	remove_event_role::*,
};
use crate::prelude::*;

/// Sets up the organizing team routes. Adding and removing roles is reserved
/// for the event owner, while the team listing is open to the team itself.
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(add_event_role, state)
		.mount_auth_endpoint(list_event_roles, state)
		.mount_auth_endpoint(remove_event_role, state)
}
