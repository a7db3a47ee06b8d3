mod book_resource;
mod create_resource;
mod list_resource_bookings;
mod list_resources;
mod update_booking_status;

use axum::Router;

pub use self::{
	book_resource::*,
	create_resource::*,
	list_resource_bookings::*,
	list_resources::*,
	update_booking_status::*,
};
use crate::prelude::*;

/// Sets up the resource and booking routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(book_resource, state)
		.mount_auth_endpoint(create_resource, state)
		.mount_auth_endpoint(list_resource_bookings, state)
		.mount_auth_endpoint(list_resources, state)
		.mount_auth_endpoint(update_booking_status, state)
}
