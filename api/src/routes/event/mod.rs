/// All endpoints related to the budget of an event
mod budget;
/// All endpoints related to the organizer message board of an event
mod message;
/// All endpoints related to the permissions granted on an event
mod permission;
/// All endpoints related to the resources of an event and their bookings
mod resource;
/// All endpoints related to the organizing team of an event
mod role;
/// All endpoints related to the tasks of an event
mod task;

mod create_event;
mod delete_event;
mod get_event_info;
mod list_event_attendees;
mod list_events;
mod register_for_event;
mod update_event;

use axum::Router;

pub use self::{
	create_event::*,
	delete_event::*,
	get_event_info::*,
	list_event_attendees::*,
	list_events::*,
	register_for_event::*,
	update_event::*,
};
use crate::prelude::*;

/// Sets up the event routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.merge(budget::setup_routes(state).await)
		.merge(message::setup_routes(state).await)
		.merge(permission::setup_routes(state).await)
		.merge(resource::setup_routes(state).await)
		.merge(role::setup_routes(state).await)
		.merge(task::setup_routes(state).await)
		.mount_auth_endpoint(create_event, state)
		.mount_auth_endpoint(delete_event, state)
		.mount_auth_endpoint(get_event_info, state)
		.mount_auth_endpoint(list_event_attendees, state)
		.mount_auth_endpoint(list_events, state)
		.mount_auth_endpoint(register_for_event, state)
		.mount_auth_endpoint(update_event, state)
}
