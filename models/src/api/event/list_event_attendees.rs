use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the attendees of an event
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
#[typed_path("/event/:event_id/attendee")]
pub struct ListEventAttendeesPath {
	/// The ID of the event to list the attendees of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListEventAttendeesPath {
	type RequiredResponseHeaders = ();
}

/// A user registered to attend an event. The ID of the surrounding
/// [`WithId`] is the user ID of the attendee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
	/// The username of the attendee
	pub username: String,
	/// The first name of the attendee
	pub first_name: String,
	/// The last name of the attendee
	pub last_name: String,
	/// When the attendee registered for the event
	pub registered: OffsetDateTime,
}

/// The request to list the users registered to attend an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEventAttendeesRequest;

impl Preprocessable for ListEventAttendeesRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListEventAttendeesRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageAttendees,
		};

	type RequestPath = ListEventAttendeesPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListEventAttendeesResponse;
}

impl RequiresResponseHeaders for ListEventAttendeesRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the page of attendees of the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventAttendeesResponse {
	/// The list of attendees in this page
	pub attendees: Vec<WithId<EventAttendee>>,
}

impl RequiresRequestHeaders for ListEventAttendeesResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListEventAttendeesResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{EventAttendee, ListEventAttendeesResponse};
	use crate::prelude::*;

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&ListEventAttendeesResponse {
				attendees: vec![WithId::new(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
					EventAttendee {
						username: "john-doe".to_string(),
						first_name: "John".to_string(),
						last_name: "Doe".to_string(),
						registered: OffsetDateTime::UNIX_EPOCH,
					},
				)],
			}
			.readable(),
			&[
				Token::Struct {
					name: "ListEventAttendeesResponse",
					len: 1,
				},
				Token::Str("attendees"),
				Token::Seq { len: Some(1) },
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("username"),
				Token::Str("john-doe"),
				Token::Str("firstName"),
				Token::Str("John"),
				Token::Str("lastName"),
				Token::Str("Doe"),
				Token::Str("registered"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::MapEnd,
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
