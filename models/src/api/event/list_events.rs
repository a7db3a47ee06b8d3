use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Event;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists events
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	Default,
	TypedPath,
	PartialEq,
	Serialize,
	PartialOrd,
	Deserialize,
)]
#[typed_path("/event")]
pub struct ListEventsPath;

impl RequiresResponseHeaders for ListEventsPath {
	type RequiredResponseHeaders = ();
}

/// The request to list events. This returns every published event, along with
/// the user's own drafts and any unpublished events they help organize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEventsRequest;

impl Preprocessable for ListEventsRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListEventsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = ListEventsPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListEventsResponse;
}

impl RequiresResponseHeaders for ListEventsRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the page of events that the user can see
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
	/// The list of events in this page
	pub events: Vec<WithId<Event>>,
}

impl RequiresRequestHeaders for ListEventsResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListEventsResponse {
	type RequiredResponseHeaders = ();
}
