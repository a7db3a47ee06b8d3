use axum::Router;
use tower_http::cors::CorsLayer;

use crate::prelude::*;

/// All authentication related routes, including sign up, sign in, sign out
/// and access token renewal.
mod auth;
/// All routes that relate to an event, along with its budget, messages,
/// permissions, resources, roles and tasks.
mod event;
/// All routes for the authenticated user's notifications.
mod notification;
/// All routes that relate to the authenticated user itself.
mod user;

/// Sets up all the routes for the API. The router is served as-is at the
/// root, or nested under the configured base path if one is set. Since the
/// API is called from a browser, CORS is left permissive.
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	let router = Router::new()
		.merge(auth::setup_routes(state).await)
		.merge(user::setup_routes(state).await)
		.merge(event::setup_routes(state).await)
		.merge(notification::setup_routes(state).await)
		.layer(CorsLayer::permissive());

	let base_path = state.config.api_base_path.trim_end_matches('/');
	if base_path.is_empty() {
		router
	} else {
		Router::new().nest(base_path, router)
	}
}
