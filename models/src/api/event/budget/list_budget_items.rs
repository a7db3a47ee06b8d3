use axum_extra::routing::TypedPath;
use preprocess::Preprocessable;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::BudgetItem;
use crate::{
	api::{AuthenticatedRequestHeaders, TotalCountResponseHeaders},
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that lists the budget of an event
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
#[typed_path("/event/:event_id/budget")]
pub struct ListBudgetItemsPath {
	/// The ID of the event to list the budget of
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for ListBudgetItemsPath {
	type RequiredResponseHeaders = ();
}

/// The request to list the budget of an event. Seeing the budget is a
/// separate permission from changing it, so that the numbers can be shared
/// with people who should not be editing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListBudgetItemsRequest;

impl Preprocessable for ListBudgetItemsRequest {
	type Processed = Self;

	fn preprocess(self) -> Result<Self, preprocess::Error> {
		Ok(self)
	}
}

impl ApiEndpoint for ListBudgetItemsRequest {
	const METHOD: Method = Method::GET;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::ViewBudget,
		};

	type RequestPath = ListBudgetItemsPath;
	type RequestQuery = Paginated<()>;
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = TotalCountResponseHeaders;
	type ResponseBody = ListBudgetItemsResponse;
}

impl RequiresResponseHeaders for ListBudgetItemsRequest {
	type RequiredResponseHeaders = ();
}

/// The response containing the page of budget items, along with the running
/// totals of the whole budget. The totals always cover every item of the
/// event, not just the items in this page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListBudgetItemsResponse {
	/// The list of budget items in this page
	pub items: Vec<WithId<BudgetItem>>,
	/// The planned cost of the entire event, in cents
	pub total_estimated_cents: i64,
	/// What the event has actually cost so far, in cents
	pub total_actual_cents: i64,
}

impl RequiresRequestHeaders for ListBudgetItemsResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for ListBudgetItemsResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{BudgetItem, ListBudgetItemsResponse};
	use crate::prelude::*;

	#[test]
	fn assert_response_types() {
		assert_tokens(
			&ListBudgetItemsResponse {
				items: vec![WithId::new(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
					BudgetItem {
						description: "Keynote hall rental".to_string(),
						category: "venue".to_string(),
						estimated_cents: 250_000,
						actual_cents: Some(238_500),
					},
				)],
				total_estimated_cents: 1_000_000,
				total_actual_cents: 238_500,
			},
			&[
				Token::Struct {
					name: "ListBudgetItemsResponse",
					len: 3,
				},
				Token::Str("items"),
				Token::Seq { len: Some(1) },
				Token::Map { len: None },
				Token::Str("id"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("description"),
				Token::Str("Keynote hall rental"),
				Token::Str("category"),
				Token::Str("venue"),
				Token::Str("estimatedCents"),
				Token::I64(250_000),
				Token::Str("actualCents"),
				Token::Some,
				Token::I64(238_500),
				Token::MapEnd,
				Token::SeqEnd,
				Token::Str("totalEstimatedCents"),
				Token::I64(1_000_000),
				Token::Str("totalActualCents"),
				Token::I64(238_500),
				Token::StructEnd,
			],
		);
	}
}
