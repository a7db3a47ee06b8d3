use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that grants a permission on an event
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
#[typed_path("/event/:event_id/permission")]
pub struct GrantEventPermissionPath {
	/// The ID of the event to grant the permission on
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for GrantEventPermissionPath {
	type RequiredResponseHeaders = ();
}

/// The request to grant or explicitly deny a permission to a user on an
/// event. Only the owner of the event can make grants. Granting a permission
/// that the user already has a grant for overwrites the old grant, so the
/// latest decision always wins.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GrantEventPermissionRequest {
	/// The user ID of the user to grant the permission to
	#[preprocess(none)]
	pub user_id: Uuid,
	/// The permission to grant
	#[preprocess(none)]
	pub permission: Permission,
	/// Whether the permission is given or explicitly denied
	#[preprocess(none)]
	pub allowed: bool,
}

impl ApiEndpoint for GrantEventPermissionRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = GrantEventPermissionPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = GrantEventPermissionResponse;
}

impl RequiresResponseHeaders for GrantEventPermissionRequest {
	type RequiredResponseHeaders = ();
}

/// The response for granting a permission on an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GrantEventPermissionResponse {}

impl RequiresRequestHeaders for GrantEventPermissionResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for GrantEventPermissionResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::GrantEventPermissionRequest;
	use crate::prelude::*;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&GrantEventPermissionRequest {
				user_id: Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
					.unwrap(),
				permission: Permission::ApproveBookings,
				allowed: false,
			},
			&[
				Token::Struct {
					name: "GrantEventPermissionRequest",
					len: 3,
				},
				Token::Str("userId"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("permission"),
				Token::UnitVariant {
					name: "Permission",
					variant: "approveBookings",
				},
				Token::Str("allowed"),
				Token::Bool(false),
				Token::StructEnd,
			],
		);
	}
}
