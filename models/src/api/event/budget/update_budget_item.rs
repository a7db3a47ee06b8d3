use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that updates an item in the budget of an event
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	TypedPath,
	PartialEq,
	Serialize,
	PartialOrd,
	Deserialize,
)]
#[typed_path("/event/:event_id/budget/:item_id")]
pub struct UpdateBudgetItemPath {
	/// The ID of the event the budget item belongs to
	pub event_id: Uuid,
	/// The ID of the budget item to update
	pub item_id: Uuid,
}

impl RequiresResponseHeaders for UpdateBudgetItemPath {
	type RequiredResponseHeaders = ();
}

/// The request to update an item in the budget of an event. All fields are
/// optional, and only the provided fields are changed. Filling in the actual
/// amount is how an item is marked as paid for.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetItemRequest {
	/// The new description of the item
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(min = 1, max = 250)))]
	pub description: Option<String>,
	/// The new category of the item
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, lowercase, length(min = 1, max = 100)))]
	pub category: Option<String>,
	/// The new planned cost of the item, in cents
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(range(min = 0)))]
	pub estimated_cents: Option<i64>,
	/// What the item actually cost, in cents
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(range(min = 0)))]
	pub actual_cents: Option<i64>,
}

impl ApiEndpoint for UpdateBudgetItemRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::EditBudget,
		};

	type RequestPath = UpdateBudgetItemPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = UpdateBudgetItemResponse;
}

impl RequiresResponseHeaders for UpdateBudgetItemRequest {
	type RequiredResponseHeaders = ();
}

/// The response for updating an item in the budget of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetItemResponse {}

impl RequiresRequestHeaders for UpdateBudgetItemResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for UpdateBudgetItemResponse {
	type RequiredResponseHeaders = ();
}
