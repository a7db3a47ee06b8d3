use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::EventPermissionGrant;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the permission grants on an event
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
pub struct ListEventPermissionsPath {
	/// The ID of the event to list the grants of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListEventPermissionsPath {
	type RequiredResponseHeaders = ();
}

/// The request to list every permission grant on an event. Only the owner of
/// the event can see the grants, since the owner is the only one who can
/// change them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEventPermissionsRequest;

impl Preprocessable for ListEventPermissionsRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListEventPermissionsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = ListEventPermissionsPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = ListEventPermissionsResponse;
}

impl RequiresResponseHeaders for ListEventPermissionsRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing every permission grant on the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventPermissionsResponse {
	/// The list of grants, one per user and permission
	pub grants: Vec<EventPermissionGrant>,
}

impl RequiresRequestHeaders for ListEventPermissionsResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListEventPermissionsResponse {
	type RequiredResponseHeaders = ();
}
