use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that registers the user for an event
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
#[typed_path("/event/:event_id/register")]
pub struct RegisterForEventPath {
	/// The ID of the event to register for
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for RegisterForEventPath {
	type RequiredResponseHeaders = ();
}

/// The request to register the current user as an attendee of an event. Only
/// published events accept registrations. Registering twice is not an error
/// and leaves the first registration untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterForEventRequest;

impl Preprocessable for RegisterForEventRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for RegisterForEventRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = RegisterForEventPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = RegisterForEventResponse;
}

impl RequiresResponseHeaders for RegisterForEventRequest {
	type RequiredResponseHeaders = ();
}

/// The response for registering for an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForEventResponse {}

impl RequiresRequestHeaders for RegisterForEventResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for RegisterForEventResponse {
	type RequiredResponseHeaders = ();
}
