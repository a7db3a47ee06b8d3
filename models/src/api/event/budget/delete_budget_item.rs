use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that deletes an item from the budget of an event
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
pub struct DeleteBudgetItemPath {
	/// The ID of the event the budget item belongs to
	pub event_id: Uuid,
	/// The ID of the budget item to delete
	pub item_id: Uuid,
}

impl RequiresResponseHeaders for DeleteBudgetItemPath {
	type RequiredResponseHeaders = ();
}

/// The request to delete an item from the budget of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteBudgetItemRequest;

impl Preprocessable for DeleteBudgetItemRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for DeleteBudgetItemRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::EditBudget,
		};

	type RequestPath = DeleteBudgetItemPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = DeleteBudgetItemResponse;
}

impl RequiresResponseHeaders for DeleteBudgetItemRequest {
	type RequiredResponseHeaders = ();
}

/// The response for deleting an item from the budget of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBudgetItemResponse {}

impl RequiresRequestHeaders for DeleteBudgetItemResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for DeleteBudgetItemResponse {
	type RequiredResponseHeaders = ();
}
