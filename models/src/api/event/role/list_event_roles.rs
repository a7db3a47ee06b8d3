use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::EventRoleMember;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the organizing team of an event
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
pub struct ListEventRolesPath {
	/// The ID of the event to list the team of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListEventRolesPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the organizing team of an event. The team is visible
/// to the owner and to everyone holding a role on the event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEventRolesRequest;

impl Preprocessable for ListEventRolesRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListEventRolesRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = ListEventRolesPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = ListEventRolesResponse;
}

impl RequiresResponseHeaders for ListEventRolesRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the organizing team of the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventRolesResponse {
	/// Every member of the organizing team, along with the roles they hold
	pub members: Vec<WithId<EventRoleMember>>,
}

impl RequiresRequestHeaders for ListEventRolesResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListEventRolesResponse {
	type RequiredResponseHeaders = ();
}
