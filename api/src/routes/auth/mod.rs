mod create_account;
mod login;
mod logout;
mod renew_access_token;

use axum::Router;

pub use self::{
	create_account::*,
	login::*,
	logout::*,
	renew_access_token::*,
};
use crate::prelude::*;

/// Sets up the auth routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_endpoint(create_account, state)
		.mount_endpoint(login, state)
		.mount_auth_endpoint(logout, state)
		.mount_endpoint(renew_access_token, state)
}
