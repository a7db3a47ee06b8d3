use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::EventTask;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the tasks of an event
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
pub struct ListTasksPath {
	/// The ID of the event to list tasks for
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListTasksPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the tasks of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListTasksRequest;

impl Preprocessable for ListTasksRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListTasksRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageTasks,
		};

	type RequestPath = ListTasksPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListTasksResponse;
}

impl RequiresResponseHeaders for ListTasksRequest {
	type RequiredResponseHeaders = ();
}

/// The response for listing the tasks of an event, ordered by their due
/// date with undated tasks last
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponse {
	/// The tasks of the event
	pub tasks: Vec<WithId<EventTask>>,
}

impl RequiresRequestHeaders for ListTasksResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListTasksResponse {
	type RequiredResponseHeaders = ();
}
