mod grant_event_permission;
mod list_event_permissions;
mod revoke_event_permission;

use axum::Router;

pub use self::{
	grant_event_permission::*,
	list_event_permissions::*,
	revoke_event_permission::*,
};
use crate::prelude::*;

/// Sets up the permission grant routes. All of these are reserved for the
/// event owner.
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(grant_event_permission, state)
		.mount_auth_endpoint(list_event_permissions, state)
		.mount_auth_endpoint(revoke_event_permission, state)
}
