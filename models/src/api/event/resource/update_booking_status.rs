use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::BookingStatus;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that decides on a booking
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
#[typed_path("/event/:event_id/resource/:resource_id/booking/:booking_id")]
pub struct UpdateBookingStatusPath {
	/// The ID of the event the resource belongs to
	pub event_id: Uuid,
	/// The ID of the resource the booking is for
	pub resource_id: Uuid,
	/// The ID of the booking to decide on
	pub booking_id: Uuid,
}

impl RequiresResponseHeaders for UpdateBookingStatusPath {
	type RequiredResponseHeaders = ();
}

/// The request to move a booking to a new status. Pending bookings can be
/// confirmed, rejected or cancelled, and confirmed bookings can be cancelled.
/// Anything else is turned down, so a booking that has been decided on stays
/// decided.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
	/// The status to move the booking to
	#[preprocess(none)]
	pub status: BookingStatus,
}

impl ApiEndpoint for UpdateBookingStatusRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ApproveBookings,
		};

	type RequestPath = UpdateBookingStatusPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = UpdateBookingStatusResponse;
}

impl RequiresResponseHeaders for UpdateBookingStatusRequest {
	type RequiredResponseHeaders = ();
}

/// The response for deciding on a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusResponse {}

impl RequiresRequestHeaders for UpdateBookingStatusResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for UpdateBookingStatusResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{BookingStatus, UpdateBookingStatusRequest};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&UpdateBookingStatusRequest {
				status: BookingStatus::Confirmed,
			},
			&[
				Token::Struct {
					name: "UpdateBookingStatusRequest",
					len: 1,
				},
				Token::Str("status"),
				Token::UnitVariant {
					name: "BookingStatus",
					variant: "confirmed",
				},
				Token::StructEnd,
			],
		);
	}
}
