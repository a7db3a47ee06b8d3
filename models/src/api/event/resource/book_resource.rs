use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that requests a booking of a resource
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
#[typed_path("/event/:event_id/resource/:resource_id/booking")]
pub struct BookResourcePath {
	/// The ID of the event the resource belongs to
	pub event_id: Uuid,
	/// The ID of the resource to book
	pub resource_id: Uuid,
}

impl RequiresResponseHeaders for BookResourcePath {
	type RequiredResponseHeaders = ();
}

/// The request to book a resource for a window of time. The booking starts
/// out pending until someone allowed to approve bookings decides on it, but
/// it holds its window right away. If the window overlaps a pending or
/// confirmed booking of the same resource, the request is turned down.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookResourceRequest {
	/// When the booking starts
	#[preprocess(none)]
	pub starts: OffsetDateTime,
	/// When the booking ends. The window is half-open, so another booking may
	/// start at this exact time. Must be after the start time
	#[preprocess(none)]
	pub ends: OffsetDateTime,
	/// A note about what the booking is for
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(max = 500)))]
	pub note: Option<String>,
}

impl ApiEndpoint for BookResourceRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageResources,
		};

	type RequestPath = BookResourcePath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = BookResourceResponse;
}

impl RequiresResponseHeaders for BookResourceRequest {
	type RequiredResponseHeaders = ();
}

/// The response for requesting a booking of a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookResourceResponse {
	/// The ID of the created booking
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for BookResourceResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for BookResourceResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::BookResourceRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&BookResourceRequest {
				starts: OffsetDateTime::UNIX_EPOCH,
				ends: OffsetDateTime::UNIX_EPOCH,
				note: Some("Sound check".to_string()),
			}
			.readable(),
			&[
				Token::Struct {
					name: "BookResourceRequest",
					len: 3,
				},
				Token::Str("starts"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("ends"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("note"),
				Token::Some,
				Token::Str("Sound check"),
				Token::StructEnd,
			],
		);
	}
}
