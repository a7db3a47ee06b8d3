use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that marks a notification as read
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
#[typed_path("/notification/:notification_id")]
pub struct MarkNotificationReadPath {
	/// The ID of the notification to mark as read
	pub notification_id: Uuid,
}

impl RequiresResponseHeaders for MarkNotificationReadPath {
	type RequiredResponseHeaders = ();
}

/// The request to mark a notification as read. Notifications belong to the
/// user they were delivered to, so marking anyone else's notification fails
/// as if it did not exist. Marking an already read notification succeeds
/// and changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkNotificationReadRequest;

impl Preprocessable for MarkNotificationReadRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for MarkNotificationReadRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = MarkNotificationReadPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = MarkNotificationReadResponse;
}

impl RequiresResponseHeaders for MarkNotificationReadRequest {
	type RequiredResponseHeaders = ();
}

/// The response for marking a notification as read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkNotificationReadResponse {}

impl RequiresRequestHeaders for MarkNotificationReadResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for MarkNotificationReadResponse {
	type RequiredResponseHeaders = ();
}
