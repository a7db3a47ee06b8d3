mod add_budget_item;
mod delete_budget_item;
mod list_budget_items;
mod update_budget_item;

use axum::Router;

pub use self::{
	add_budget_item::*,
	delete_budget_item::*,
	list_budget_items::*,
	update_budget_item::*,
};
use crate::prelude::*;

/// Sets up the budget routes
#[instrument(skip(state))]
pub async fn setup_routes(state: &AppState) -> Router {
	Router::new()
		.mount_auth_endpoint(add_budget_item, state)
		.mount_auth_endpoint(delete_budget_item, state)
		.mount_auth_endpoint(list_budget_items, state)
		.mount_auth_endpoint(update_budget_item, state)
}
