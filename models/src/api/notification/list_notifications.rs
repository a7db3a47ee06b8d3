use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::Notification;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the notifications of the logged in
/// user
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
#[typed_path("/notification")]
pub struct ListNotificationsPath;

impl RequiresResponseHeaders for ListNotificationsPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the notifications of the logged in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListNotificationsRequest;

impl Preprocessable for ListNotificationsRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListNotificationsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = ListNotificationsPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListNotificationsResponse;
}

impl RequiresResponseHeaders for ListNotificationsRequest {
	type RequiredResponseHeaders = ();
}

/// The response for listing the notifications of the logged in user, newest
/// first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsResponse {
	/// The notifications delivered to the user
	pub notifications: Vec<WithId<Notification>>,
}

impl RequiresRequestHeaders for ListNotificationsResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListNotificationsResponse {
	type RequiredResponseHeaders = ();
}
