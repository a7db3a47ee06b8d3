use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that creates a task on an event
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
#[typed_path("/event/:event_id/task")]
pub struct CreateTaskPath {
	/// The ID of the event to create the task on
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for CreateTaskPath {
	type RequiredResponseHeaders = ();
}

/// The request to put a task on the todo list of an event. New tasks always
/// start out in the todo status. A task can only be assigned to the owner or
/// a member of the organizing team.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
	/// What needs to be done
	#[preprocess(trim, length(min = 1, max = 250))]
	pub title: String,
	/// More detail about the task, if the title is not enough
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(max = 5000)))]
	pub description: Option<String>,
	/// The user ID of the team member to assign the task to
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub assigned_to: Option<Uuid>,
	/// When the task has to be done by
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub due: Option<OffsetDateTime>,
}

impl ApiEndpoint for CreateTaskRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageTasks,
		};

	type RequestPath = CreateTaskPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = CreateTaskResponse;
}

impl RequiresResponseHeaders for CreateTaskRequest {
	type RequiredResponseHeaders = ();
}

/// The response for creating a task on an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskResponse {
	/// The ID of the created task
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for CreateTaskResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for CreateTaskResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::CreateTaskRequest;
	use crate::prelude::*;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&CreateTaskRequest {
				title: "Order badges".to_string(),
				description: Some("500 attendee badges plus lanyards".to_string()),
				assigned_to: Some(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
				),
				due: None,
			},
			&[
				Token::Struct {
					name: "CreateTaskRequest",
					len: 3,
				},
				Token::Str("title"),
				Token::Str("Order badges"),
				Token::Str("description"),
				Token::Some,
				Token::Str("500 attendee badges plus lanyards"),
				Token::Str("assignedTo"),
				Token::Some,
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::StructEnd,
			],
		);
	}
}
