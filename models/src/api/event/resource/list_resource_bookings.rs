use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ResourceBooking;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the bookings of a resource
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
pub struct ListResourceBookingsPath {
	/// The ID of the event the resource belongs to
	pub event_id: Uuid,
	/// The ID of the resource to list the bookings of
	pub resource_id: Uuid,
}

impl RequiresResponseHeaders for ListResourceBookingsPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the bookings of a resource, including the rejected
/// and cancelled ones
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResourceBookingsRequest;

impl Preprocessable for ListResourceBookingsRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListResourceBookingsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageResources,
		};

	type RequestPath = ListResourceBookingsPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListResourceBookingsResponse;
}

impl RequiresResponseHeaders for ListResourceBookingsRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the page of bookings of the resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResourceBookingsResponse {
	/// The list of bookings in this page
	pub bookings: Vec<WithId<ResourceBooking>>,
}

impl RequiresRequestHeaders for ListResourceBookingsResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListResourceBookingsResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{ListResourceBookingsResponse, ResourceBooking};
	use crate::{api::event::BookingStatus, prelude::*};

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&ListResourceBookingsResponse {
				bookings: vec![WithId::new(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
					ResourceBooking {
						resource_id: Uuid::parse_str(
							"8aef18631ded45eb9170dc2166b30867",
						)
						.unwrap(),
						booked_by: Uuid::parse_str(
							"4aef18631ded45eb9170dc2166b30867",
						)
						.unwrap(),
						starts: OffsetDateTime::UNIX_EPOCH,
						ends: OffsetDateTime::UNIX_EPOCH,
						note: None,
						status: BookingStatus::Pending,
						created: OffsetDateTime::UNIX_EPOCH,
					},
				)],
			}
			.readable(),
			&[
				Token::Struct {
					name: "ListResourceBookingsResponse",
					len: 1,
				},
				Token::Str("bookings"),
				Token::Seq { len: Some(1) },
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("resourceId"),
				Token::Str("8aef18631ded45eb9170dc2166b30867"),
				Token::Str("bookedBy"),
				Token::Str("4aef18631ded45eb9170dc2166b30867"),
				Token::Str("starts"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("ends"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("note"),
				Token::None,
				Token::Str("status"),
				Token::UnitVariant {
					name: "BookingStatus",
					variant: "pending",
				},
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::MapEnd,
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
