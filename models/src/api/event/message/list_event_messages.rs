use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::EventMessage;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the messages on an event's board
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
#[typed_path("/event/:event_id/message")]
pub struct ListEventMessagesPath {
	/// The ID of the event to list messages for
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListEventMessagesPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the messages on an event's board. Any member of the
/// event's team can read the board, whether or not they can post on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEventMessagesRequest;

impl Preprocessable for ListEventMessagesRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListEventMessagesRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = ListEventMessagesPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListEventMessagesResponse;
}

impl RequiresResponseHeaders for ListEventMessagesRequest {
	type RequiredResponseHeaders = ();
}

/// The response for listing the messages on an event's board, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventMessagesResponse {
	/// The messages posted on the event's board
	pub messages: Vec<WithId<EventMessage>>,
}

impl RequiresRequestHeaders for ListEventMessagesResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListEventMessagesResponse {
	type RequiredResponseHeaders = ();
}
