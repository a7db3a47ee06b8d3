use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that posts a message on an event's board
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
#[typed_path("/event/:event_id/message")]
pub struct PostEventMessagePath {
	/// The ID of the event to post the message on
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for PostEventMessagePath {
	type RequiredResponseHeaders = ();
}

/// The request to post a message on an event's board
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostEventMessageRequest {
	/// The text of the message
	#[preprocess(trim, length(min = 1, max = 5000))]
	pub body: String,
}

impl ApiEndpoint for PostEventMessageRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::PostMessages,
		};

	type RequestPath = PostEventMessagePath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = PostEventMessageResponse;
}

impl RequiresResponseHeaders for PostEventMessageRequest {
	type RequiredResponseHeaders = ();
}

/// The response for posting a message on an event's board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(rename_all = "camelCase")]
pub struct PostEventMessageResponse {
	/// The ID of the posted message
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for PostEventMessageResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for PostEventMessageResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{PostEventMessageRequest, PostEventMessageResponse};
	use crate::{prelude::*, ApiResponse};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&PostEventMessageRequest {
				body: "The caterer confirmed for Saturday".to_string(),
			},
			&[
				Token::Struct {
					name: "PostEventMessageRequest",
					len: 1,
				},
				Token::Str("body"),
				Token::Str("The caterer confirmed for Saturday"),
				Token::StructEnd,
			],
		);
	}

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&PostEventMessageResponse {
				id: WithId::new(Uuid::nil(), ()),
			},
			&[
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("00000000000000000000000000000000"),
				Token::MapEnd,
			],
		);
	}

	#[test]
	fn assert_success_response_types() {
		assert_tokens(
			&ApiResponse::success(PostEventMessageResponse {
				id: WithId::new(Uuid::nil(), ()),
			}),
			&[
				Token::Map { len: None },
				Token::Str("success"),
				Token::Bool(true),
				Token::Str("id"),
				Token::Str("00000000000000000000000000000000"),
				Token::MapEnd,
			],
		);
	}
}
