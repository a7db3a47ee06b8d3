use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::EventStatus;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that updates an event
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
pub struct UpdateEventPath {
	/// The ID of the event to update
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for UpdateEventPath {
	type RequiredResponseHeaders = ();
}

/// The request to update an event. All fields are optional, and only the
/// provided fields are changed. The status field moves the event through its
/// lifecycle: drafts can be published, and draft or published events can be
/// cancelled. A cancelled event cannot change at all anymore.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
	/// The new name of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(min = 1, max = 250)))]
	pub name: Option<String>,
	/// The new description of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(min = 1, max = 5000)))]
	pub description: Option<String>,
	/// The new venue of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(min = 1, max = 250)))]
	pub venue: Option<String>,
	/// The new start time of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub starts: Option<OffsetDateTime>,
	/// The new end time of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub ends: Option<OffsetDateTime>,
	/// The new lifecycle status of the event
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub status: Option<EventStatus>,
}

impl ApiEndpoint for UpdateEventRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::EditEvent,
		};

	type RequestPath = UpdateEventPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = UpdateEventResponse;
}

impl RequiresResponseHeaders for UpdateEventRequest {
	type RequiredResponseHeaders = ();
}

/// The response for updating an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventResponse {}

impl RequiresRequestHeaders for UpdateEventResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for UpdateEventResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{EventStatus, UpdateEventRequest};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&UpdateEventRequest {
				name: Some("RustConf 2026".to_string()),
				description: None,
				venue: None,
				starts: None,
				ends: None,
				status: Some(EventStatus::Published),
			},
			&[
				Token::Struct {
					name: "UpdateEventRequest",
					len: 2,
				},
				Token::Str("name"),
				Token::Some,
				Token::Str("RustConf 2026"),
				Token::Str("status"),
				Token::Some,
				Token::UnitVariant {
					name: "EventStatus",
					variant: "published",
				},
				Token::StructEnd,
			],
		);
	}
}
