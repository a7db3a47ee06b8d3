use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that removes a permission grant from an event
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
#[typed_path("/event/:event_id/permission/:user_id/:permission")]
pub struct RevokeEventPermissionPath {
	/// The ID of the event the grant is on
	pub event_id: Uuid,
	/// The user ID of the user the grant was made to
	pub user_id: Uuid,
	/// The permission to revoke
	pub permission: Permission,
}

impl RequiresResponseHeaders for RevokeEventPermissionPath {
	type RequiredResponseHeaders = ();
}

/// The request to remove a permission grant from a user on an event. Only the
/// owner of the event can revoke grants. Once the grant is gone the user
/// falls back to not having the permission. Revoking a permission that was
/// never granted changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevokeEventPermissionRequest;

impl Preprocessable for RevokeEventPermissionRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for RevokeEventPermissionRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = RevokeEventPermissionPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = RevokeEventPermissionResponse;
}

impl RequiresResponseHeaders for RevokeEventPermissionRequest {
	type RequiredResponseHeaders = ();
}

/// The response for revoking a permission grant on an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevokeEventPermissionResponse {}

impl RequiresRequestHeaders for RevokeEventPermissionResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for RevokeEventPermissionResponse {
	type RequiredResponseHeaders = ();
}
