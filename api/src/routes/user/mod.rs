mod get_user_info;

use axum::Router;

pub use self::get_user_info::*;
use crate::prelude::*;

/// Sets up the user routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new().mount_auth_endpoint(get_user_info, state)
}
