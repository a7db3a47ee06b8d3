use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that deletes an event
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
#[typed_path("/event/:event_id")]
pub struct DeleteEventPath {
	/// The ID of the event to delete
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for DeleteEventPath {
	type RequiredResponseHeaders = ();
}

/// The request to delete an event. Only the owner of an event can delete it.
/// Deleting an event removes everything that hangs off it as well, like its
/// budget, resources, bookings, tasks and messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteEventRequest;

impl Preprocessable for DeleteEventRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for DeleteEventRequest {
	const METHOD: Method = Method::DELETE;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventOwnerAuthenticator {
			extract_event_id: |req| req.path.event_id,
		};

	type RequestPath = DeleteEventPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = DeleteEventResponse;
}

impl RequiresResponseHeaders for DeleteEventRequest {
	type RequiredResponseHeaders = ();
}

/// The response for deleting an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {}

impl RequiresRequestHeaders for DeleteEventResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for DeleteEventResponse {
	type RequiredResponseHeaders = ();
}
