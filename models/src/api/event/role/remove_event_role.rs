use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that removes a user from the organizing team of an
/// event
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
#[typed_path("/event/:event_id/role/:user_id/:role")]
pub struct RemoveEventRolePath {
	/// The ID of the event to remove the user from
	pub event_id: Uuid,
	/// The user ID of the user to remove from the team
	pub user_id: Uuid,
	/// The role to take away from the user
	pub role: EventRole,
}

impl RequiresResponseHeaders for RemoveEventRolePath {
	type RequiredResponseHeaders = ();
}

/// The request to take a role away from a user on an event. Only the owner of
/// the event can manage its organizing team. Removing a role does not touch
/// the permissions granted to the user, although without any role they stop
/// being part of the team. Removing a role the user does not hold changes
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveEventRoleRequest;

impl Preprocessable for RemoveEventRoleRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for RemoveEventRoleRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = RemoveEventRolePath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = RemoveEventRoleResponse;
}

impl RequiresResponseHeaders for RemoveEventRoleRequest {
	type RequiredResponseHeaders = ();
}

/// The response for removing a user from the organizing team of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEventRoleResponse {}

impl RequiresRequestHeaders for RemoveEventRoleResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for RemoveEventRoleResponse {
	type RequiredResponseHeaders = ();
}
