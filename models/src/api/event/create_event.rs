use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that creates a new event
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
pub struct CreateEventPath;

impl RequiresResponseHeaders for CreateEventPath {
	type RequiredResponseHeaders = ();
}

/// The request to create a new event. The user creating the event becomes its
/// owner. New events always start out as drafts and have to be published
/// before anyone can register for them.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
	/// The name of the event
	#[preprocess(trim, length(min = 1, max = 250))]
	pub name: String,
	/// A description of the event, shown to users browsing it
	#[preprocess(trim, length(min = 1, max = 5000))]
	pub description: String,
	/// Where the event takes place
	#[preprocess(trim, length(min = 1, max = 250))]
	pub venue: String,
	/// When the event starts
	#[preprocess(none)]
	pub starts: OffsetDateTime,
	/// When the event ends. Must be after the start time
	#[preprocess(none)]
	pub ends: OffsetDateTime,
}

impl ApiEndpoint for CreateEventRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = CreateEventPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = CreateEventResponse;
}

impl RequiresResponseHeaders for CreateEventRequest {
	type RequiredResponseHeaders = ();
}

/// The response for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
	/// The ID of the created event
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for CreateEventResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for CreateEventResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::CreateEventResponse;
	use crate::{prelude::*, ApiResponse};

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&CreateEventResponse {
				id: WithId::from(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
				),
			},
			&[
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::MapEnd,
			],
		);
	}

	#[test]
	fn assert_success_response_types() {
		assert_tokens(
			&ApiResponse::success(CreateEventResponse {
				id: WithId::from(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
				),
			}),
			&[
				Token::Map { len: None },
				Token::Str("success"),
				Token::Bool(true),
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::MapEnd,
			],
		);
	}
}
