use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	prelude::*,
	utils::{
		constants::USERNAME_VALIDITY_REGEX,
		NoAuthentication,
		RequiresRequestHeaders,
		RequiresResponseHeaders,
	},
};

/// The path for the sign up route
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
#[typed_path("/auth/sign-up")]
pub struct CreateAccountPath;

impl RequiresResponseHeaders for CreateAccountPath {
	type RequiredResponseHeaders = ();
}

/// The request to create a new user account. Creating an account does not
/// start a session. The user has to sign in separately once the account
/// exists.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
	/// The username of the user signing up
	#[preprocess(
		trim,
		lowercase,
		length(min = 2, max = 100),
		regex = USERNAME_VALIDITY_REGEX
	)]
	pub username: String,
	/// The password of the user
	#[preprocess(length(min = 8))]
	pub password: String,
	/// The first name of the user
	#[preprocess(trim, length(min = 1, max = 100))]
	pub first_name: String,
	/// The last name of the user
	#[preprocess(trim, length(min = 1, max = 100))]
	pub last_name: String,
	/// The email address of the user
	#[preprocess(trim, lowercase, email)]
	pub email: String,
}

impl ApiEndpoint for CreateAccountRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator = NoAuthentication;

	type RequestPath = CreateAccountPath;
	type RequestQuery = ();
	type RequestHeaders = ();
	type RequestBody = Self;
	type Authenticator = NoAuthentication;
	type ResponseHeaders = ();
	type ResponseBody = CreateAccountResponse;
}

impl RequiresResponseHeaders for CreateAccountRequest {
	type RequiredResponseHeaders = ();
}

/// The response for creating a new user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {}

impl RequiresRequestHeaders for CreateAccountResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for CreateAccountResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{CreateAccountRequest, CreateAccountResponse};
	use crate::ApiResponse;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreateAccountRequest {
				username: "john-doe".to_string(),
				password: "hunter42hunter42".to_string(),
				first_name: "John".to_string(),
				last_name: "Doe".to_string(),
				email: "johndoe@example.com".to_string(),
			},
			&[
				Token::Struct {
					name: "CreateAccountRequest",
					len: 5,
				},
				Token::Str("username"),
				Token::Str("john-doe"),
				Token::Str("password"),
				Token::Str("hunter42hunter42"),
				Token::Str("firstName"),
				Token::Str("John"),
				Token::Str("lastName"),
				Token::Str("Doe"),
				Token::Str("email"),
				Token::Str("johndoe@example.com"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&CreateAccountResponse {},
			&[
				Token::Struct {
					name: "CreateAccountResponse",
					len: 0,
				},
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_success_response_types() {
		assert_tokens(
			&ApiResponse::success(CreateAccountResponse {}),
			&[
				Token::Map { len: None },
				Token::Str("success"),
				Token::Bool(true),
				Token::MapEnd,
			],
		);
	}
}
