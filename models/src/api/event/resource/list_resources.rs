use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::EventResource;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the resources of an event
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
pub struct ListResourcesPath {
	/// The ID of the event to list the resources of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListResourcesPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the bookable resources of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResourcesRequest;

impl Preprocessable for ListResourcesRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListResourcesRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ManageResources,
		};

	type RequestPath = ListResourcesPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListResourcesResponse;
}

impl RequiresResponseHeaders for ListResourcesRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the page of resources of the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesResponse {
	/// The list of resources in this page
	pub resources: Vec<WithId<EventResource>>,
}

impl RequiresRequestHeaders for ListResourcesResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListResourcesResponse {
	type RequiredResponseHeaders = ();
}
