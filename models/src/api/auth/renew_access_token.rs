use axum_extra::routing::TypedPath;
use headers::HeaderMapExt;
use http::HeaderMap;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	prelude::*,
	utils::{
		BearerToken,
		HasHeader,
		Headers,
		NoAuthentication,
		RequiresRequestHeaders,
		RequiresResponseHeaders,
	},
};

/// The path for the access token renewal route
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
#[typed_path("/auth/access-token")]
pub struct RenewAccessTokenPath;

impl RequiresResponseHeaders for RenewAccessTokenPath {
	type RequiredResponseHeaders = ();
}

/// The request headers for renewing an access token. The refresh token that
/// was handed out at login goes in the `Authorization` header, in place of an
/// access token.
#[derive(Debug, Clone)]
pub struct RenewAccessTokenRequestHeaders {
	/// The refresh token which was provided to the user when they logged in
	pub refresh_token: BearerToken,
}

impl Headers for RenewAccessTokenRequestHeaders {
	fn to_header_map(&self) -> HeaderMap {
		let mut map = HeaderMap::new();
		map.typed_insert(self.refresh_token.clone());
		map
	}

	fn from_header_map(map: &HeaderMap) -> Result<Self, headers::Error> {
		Ok(Self {
			refresh_token: map
				.typed_try_get::<BearerToken>()?
				.ok_or_else(headers::Error::invalid)?,
		})
	}
}

impl HasHeader<BearerToken> for RenewAccessTokenRequestHeaders {
	fn get_header(&self) -> &BearerToken {
		&self.refresh_token
	}
}

impl RequiresResponseHeaders for RenewAccessTokenRequestHeaders {
	type RequiredResponseHeaders = ();
}

/// The request to get a new access token once the old one has expired. The
/// refresh token in the headers identifies the login to renew.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenewAccessTokenRequest;

impl Preprocessable for RenewAccessTokenRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for RenewAccessTokenRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator = NoAuthentication;

	type RequestPath = RenewAccessTokenPath;
	type RequestQuery = ();
	type RequestHeaders = RenewAccessTokenRequestHeaders;
	type RequestBody = Self;
	type Authenticator = NoAuthentication;
	type ResponseHeaders = ();
	type ResponseBody = RenewAccessTokenResponse;
}

impl RequiresResponseHeaders for RenewAccessTokenRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the renewed access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenewAccessTokenResponse {
	/// The new access token, used for authentication from here on
	pub access_token: String,
}

impl RequiresRequestHeaders for RenewAccessTokenResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for RenewAccessTokenResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::RenewAccessTokenResponse;

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&RenewAccessTokenResponse {
				access_token: "renewed-access-token".to_string(),
			},
			&[
				Token::Struct {
					name: "RenewAccessTokenResponse",
					len: 1,
				},
				Token::Str("accessToken"),
				Token::Str("renewed-access-token"),
				Token::StructEnd,
			],
		);
	}
}
