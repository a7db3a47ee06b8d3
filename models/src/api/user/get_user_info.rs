use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::BasicUserInfo;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that gets the current user's information
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
#[typed_path("/user")]
pub struct GetUserInfoPath;

impl RequiresResponseHeaders for GetUserInfoPath {
	type RequiredResponseHeaders = ();
}

/// The request to get the information of the currently authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetUserInfoRequest;

impl Preprocessable for GetUserInfoRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for GetUserInfoRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::PlainTokenAuthenticator;

	type RequestPath = GetUserInfoPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = GetUserInfoResponse;
}

impl RequiresResponseHeaders for GetUserInfoRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the current user's information. Unlike the public
/// info of a user, this includes the email address, since users are always
/// allowed to see their own data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetUserInfoResponse {
	/// The basic info of the user. Username, userId, first name, last name
	#[serde(flatten)]
	pub basic_user_info: WithId<BasicUserInfo>,
	/// The email address of the user
	pub email: String,
	/// When the user account was created
	pub created: OffsetDateTime,
}

impl RequiresRequestHeaders for GetUserInfoResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for GetUserInfoResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{BasicUserInfo, GetUserInfoResponse};
	use crate::prelude::*;

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&GetUserInfoResponse {
				basic_user_info: WithId::new(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
					BasicUserInfo {
						username: "john-doe".to_string(),
						first_name: "John".to_string(),
						last_name: "Doe".to_string(),
					},
				),
				email: "johndoe@example.com".to_string(),
				created: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("username"),
				Token::Str("john-doe"),
				Token::Str("firstName"),
				Token::Str("John"),
				Token::Str("lastName"),
				Token::Str("Doe"),
				Token::Str("email"),
				Token::Str("johndoe@example.com"),
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::MapEnd,
			],
		);
	}
}
