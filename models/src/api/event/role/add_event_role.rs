use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that adds a user to the organizing team of an event
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
#[typed_path("/event/:event_id/role")]
pub struct AddEventRolePath {
	/// The ID of the event to add the user to
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for AddEventRolePath {
	type RequiredResponseHeaders = ();
}

/// The request to give a user a role on an event. Only the owner of the event
/// can manage its organizing team. A role makes the user part of the team,
/// but what they can do is decided by the permissions granted to them
/// separately. Adding a role the user already holds changes nothing.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddEventRoleRequest {
	/// The user ID of the user to add to the team
	#[preprocess(none)]
	pub user_id: Uuid,
	/// The role to give the user
	#[preprocess(none)]
	pub role: EventRole,
}

impl ApiEndpoint for AddEventRoleRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = AddEventRolePath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = AddEventRoleResponse;
}

impl RequiresResponseHeaders for AddEventRoleRequest {
	type RequiredResponseHeaders = ();
}

/// The response for adding a user to the organizing team of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddEventRoleResponse {}

impl RequiresRequestHeaders for AddEventRoleResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for AddEventRoleResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::AddEventRoleRequest;
	use crate::prelude::*;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&AddEventRoleRequest {
				user_id: Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
					.unwrap(),
				role: EventRole::Organizer,
			},
			&[
				Token::Struct {
					name: "AddEventRoleRequest",
					len: 2,
				},
				Token::Str("userId"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("role"),
				Token::UnitVariant {
					name: "EventRole",
					variant: "organizer",
				},
				Token::StructEnd,
			],
		);
	}
}
