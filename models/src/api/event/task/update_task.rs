use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::TaskStatus;
use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that updates a task on an event
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
#[typed_path("/event/:event_id/task/:task_id")]
pub struct UpdateTaskPath {
	/// The ID of the event the task belongs to
	pub event_id: Uuid,
	/// The ID of the task to update
	pub task_id: Uuid,
}

impl RequiresResponseHeaders for UpdateTaskPath {
	type RequiredResponseHeaders = ();
}

/// The request to update a task on an event. All fields are optional, and
/// only the provided fields are changed. Tasks move freely between statuses,
/// so finished work can be reopened.
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
	/// The new title of the task
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(min = 1, max = 250)))]
	pub title: Option<String>,
	/// The new description of the task
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(optional(trim, length(max = 5000)))]
	pub description: Option<String>,
	/// The user ID of the team member to reassign the task to
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub assigned_to: Option<Uuid>,
	/// The new deadline of the task
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub due: Option<OffsetDateTime>,
	/// The new status of the task
	#[serde(skip_serializing_if = "Option::is_none")]
	#[preprocess(none)]
	pub status: Option<TaskStatus>,
}

impl ApiEndpoint for UpdateTaskRequest {
	const METHOD: Method = Method::PATCH;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageTasks,
		};

	type RequestPath = UpdateTaskPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = UpdateTaskResponse;
}

impl RequiresResponseHeaders for UpdateTaskRequest {
	type RequiredResponseHeaders = ();
}

/// The response for updating a task on an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskResponse {}

impl RequiresRequestHeaders for UpdateTaskResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for UpdateTaskResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{TaskStatus, UpdateTaskRequest};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&UpdateTaskRequest {
				title: None,
				description: None,
				assigned_to: None,
				due: None,
				status: Some(TaskStatus::Done),
			},
			&[
				Token::Struct {
					name: "UpdateTaskRequest",
					len: 1,
				},
				Token::Str("status"),
				Token::Some,
				Token::UnitVariant {
					name: "TaskStatus",
					variant: "done",
				},
				Token::StructEnd,
			],
		);
	}
}
