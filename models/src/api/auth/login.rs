use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	prelude::*,
	utils::{NoAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the sign in route
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
#[typed_path("/auth/sign-in")]
pub struct LoginPath;

impl RequiresResponseHeaders for LoginPath {
	type RequiredResponseHeaders = ();
}

/// The request to login and start a new user session. This generates the
/// tokens needed to access everything else on the API.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	/// The user identifier of the user. This can be either the username or the
	/// email of the user, depending on what the user typed in
	#[preprocess(trim, lowercase)]
	pub user_id: String,
	/// The password of the user
	pub password: String,
}

impl ApiEndpoint for LoginRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator = NoAuthentication;

	type RequestPath = LoginPath;
	type RequestQuery = ();
	type RequestHeaders = ();
	type RequestBody = Self;
	type Authenticator = NoAuthentication;
	type ResponseHeaders = ();
	type ResponseBody = LoginResponse;
}

impl RequiresResponseHeaders for LoginRequest {
	type RequiredResponseHeaders = ();
}

/// The response for logging in. The access token authenticates every other
/// request, and the refresh token is used to get a new access token once the
/// current one expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// The access token. Valid for a short while, and sent as the
	/// `Authorization` header on authenticated requests
	pub access_token: String,
	/// The refresh token, which renews the access token when it expires. It
	/// contains the login ID and the refresh token concatenated together.
	pub refresh_token: String,
}

impl RequiresRequestHeaders for LoginResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for LoginResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{LoginRequest, LoginResponse};
	use crate::ApiResponse;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&LoginRequest {
				user_id: "john-doe".to_string(),
				password: "hunter42hunter42".to_string(),
			},
			&[
				Token::Struct {
					name: "LoginRequest",
					len: 2,
				},
				Token::Str("userId"),
				Token::Str("john-doe"),
				Token::Str("password"),
				Token::Str("hunter42hunter42"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&LoginResponse {
				access_token: "access-token".to_string(),
				refresh_token: "2aef18631ded45eb9170dc2166b30867.refresh-token"
					.to_string(),
			},
			&[
				Token::Struct {
					name: "LoginResponse",
					len: 2,
				},
				Token::Str("accessToken"),
				Token::Str("access-token"),
				Token::Str("refreshToken"),
				Token::Str("2aef18631ded45eb9170dc2166b30867.refresh-token"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_success_response_types() {
		assert_tokens(
			&ApiResponse::success(LoginResponse {
				access_token: "access-token".to_string(),
				refresh_token: "2aef18631ded45eb9170dc2166b30867.refresh-token"
					.to_string(),
			}),
			&[
				Token::Map { len: None },
				Token::Str("success"),
				Token::Bool(true),
				Token::Str("accessToken"),
				Token::Str("access-token"),
				Token::Str("refreshToken"),
				Token::Str("2aef18631ded45eb9170dc2166b30867.refresh-token"),
				Token::MapEnd,
			],
		);
	}
}
