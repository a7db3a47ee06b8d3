use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that adds a resource to an event
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
#[typed_path("/event/:event_id/resource")]
pub struct CreateResourcePath {
	/// The ID of the event to add the resource to
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for CreateResourcePath {
	type RequiredResponseHeaders = ();
}

/// The request to add a resource to an event, so that it can be booked by the
/// organizing team
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
	/// The name of the resource
	#[preprocess(trim, length(min = 1, max = 250))]
	pub name: String,
	/// What kind of resource this is, like room or equipment
	#[preprocess(trim, lowercase, length(min = 1, max = 100))]
	pub kind: String,
	/// How many people or units the resource holds, if that makes sense for
	/// its kind
	#[preprocess(optional(range(min = 1)))]
	pub capacity: Option<i32>,
}

impl ApiEndpoint for CreateResourceRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageResources,
		};

	type RequestPath = CreateResourcePath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = CreateResourceResponse;
}

impl RequiresResponseHeaders for CreateResourceRequest {
	type RequiredResponseHeaders = ();
}

/// The response for adding a resource to an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceResponse {
	/// The ID of the added resource
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for CreateResourceResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for CreateResourceResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::CreateResourceRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreateResourceRequest {
				name: "Main hall".to_string(),
				kind: "room".to_string(),
				capacity: Some(800),
			},
			&[
				Token::Struct {
					name: "CreateResourceRequest",
					len: 3,
				},
				Token::Str("name"),
				Token::Str("Main hall"),
				Token::Str("kind"),
				Token::Str("room"),
				Token::Str("capacity"),
				Token::Some,
				Token::I32(800),
				Token::StructEnd,
			],
		);
	}
}
