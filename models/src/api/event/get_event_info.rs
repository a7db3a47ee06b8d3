use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Event;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that gets the details of an event
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
pub struct GetEventInfoPath {
	/// The ID of the event to get the details of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for GetEventInfoPath {
	type RequiredResponseHeaders = ();
}

/// The request to get the details of a single event. Published events are
/// visible to every signed-in user. Drafts and cancelled events are only
/// visible to the owner and the organizing team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetEventInfoRequest;

impl Preprocessable for GetEventInfoRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for GetEventInfoRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = GetEventInfoPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = GetEventInfoResponse;
}

impl RequiresResponseHeaders for GetEventInfoRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the details of the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetEventInfoResponse {
	/// The details of the event
	#[serde(flatten)]
	pub event: WithId<Event>,
	/// The number of users registered to attend the event
	pub attendee_count: usize,
}

impl RequiresRequestHeaders for GetEventInfoResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for GetEventInfoResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{Event, GetEventInfoResponse};
	use crate::{api::event::EventStatus, prelude::*};

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&GetEventInfoResponse {
				event: WithId::new(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
					Event {
						owner_id: Uuid::parse_str(
							"8aef18631ded45eb9170dc2166b30867",
						)
						.unwrap(),
						name: "RustConf".to_string(),
						description: "The annual Rust conference".to_string(),
						venue: "Montreal Convention Centre".to_string(),
						starts: OffsetDateTime::UNIX_EPOCH,
						ends: OffsetDateTime::UNIX_EPOCH,
						status: EventStatus::Published,
						created: OffsetDateTime::UNIX_EPOCH,
					},
				),
				attendee_count: 42,
			}
			.readable(),
			&[
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("ownerId"),
				Token::Str("8aef18631ded45eb9170dc2166b30867"),
				Token::Str("name"),
				Token::Str("RustConf"),
				Token::Str("description"),
				Token::Str("The annual Rust conference"),
				Token::Str("venue"),
				Token::Str("Montreal Convention Centre"),
				Token::Str("starts"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("ends"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("status"),
				Token::UnitVariant {
					name: "EventStatus",
					variant: "published",
				},
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("attendeeCount"),
				Token::U64(42),
				Token::MapEnd,
			],
		);
	}
}
