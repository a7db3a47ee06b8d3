use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the sign out route
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
#[typed_path("/auth/sign-out")]
pub struct LogoutPath;

impl RequiresResponseHeaders for LogoutPath {
	type RequiredResponseHeaders = ();
}

/// The request to end the current user session. The login that the access
/// token was minted for is deleted, which invalidates the refresh token along
/// with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutRequest;

impl Preprocessable for LogoutRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for LogoutRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = LogoutPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = LogoutResponse;
}

impl RequiresResponseHeaders for LogoutRequest {
	type RequiredResponseHeaders = ();
}

/// The response for signing out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {}

impl RequiresRequestHeaders for LogoutResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for LogoutResponse {
	type RequiredResponseHeaders = ();
}
