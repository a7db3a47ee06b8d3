use axum_extra::routing::TypedPath;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
	api::AuthenticatedRequestHeaders,
	prelude::*,
	utils::{AppAuthentication, RequiresRequestHeaders, RequiresResponseHeaders},
};

/// The path for the route that adds an item to the budget of an event
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
pub struct AddBudgetItemPath {
	/// The ID of the event whose budget the item is added to
	pub event_id: Uuid,
}

impl RequiresResponseHeaders for AddBudgetItemPath {
	type RequiredResponseHeaders = ();
}

/// The request to add an item to the budget of an event
#[preprocess::sync]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddBudgetItemRequest {
	/// What the money is for
	#[preprocess(trim, length(min = 1, max = 250))]
	pub description: String,
	/// The category the item belongs to, like catering or marketing
	#[preprocess(trim, lowercase, length(min = 1, max = 100))]
	pub category: String,
	/// The planned cost of the item, in cents
	#[preprocess(range(min = 0))]
	pub estimated_cents: i64,
	/// What the item actually cost, in cents, if it has been paid for already
	#[preprocess(optional(range(min = 0)))]
	pub actual_cents: Option<i64>,
}

impl ApiEndpoint for AddBudgetItemRequest {
	const METHOD: Method = Method::POST;
	const AUTHENTICATION: Self::Authenticator =
		AppAuthentication::<Self>::EventPermissionAuthenticator {
			extract_event_id: |req| req.path.event_id,
			permission: Permission::EditBudget,
		};

	type RequestPath = AddBudgetItemPath;
	type RequestQuery = ();
	type RequestHeaders = AuthenticatedRequestHeaders;
	type RequestBody = Self;
	type Authenticator = AppAuthentication<Self>;
	type ResponseHeaders = ();
	type ResponseBody = AddBudgetItemResponse;
}

impl RequiresResponseHeaders for AddBudgetItemRequest {
	type RequiredResponseHeaders = ();
}

/// The response for adding an item to the budget of an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddBudgetItemResponse {
	/// The ID of the added budget item
	#[serde(flatten)]
	pub id: WithId<()>,
}

impl RequiresRequestHeaders for AddBudgetItemResponse {
	type RequiredRequestHeaders = ();
}

impl RequiresResponseHeaders for AddBudgetItemResponse {
	type RequiredResponseHeaders = ();
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::AddBudgetItemRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&AddBudgetItemRequest {
				description: "Keynote hall rental".to_string(),
				category: "venue".to_string(),
				estimated_cents: 250_000,
				actual_cents: None,
			},
			&[
				Token::Struct {
					name: "AddBudgetItemRequest",
					len: 4,
				},
				Token::Str("description"),
				Token::Str("Keynote hall rental"),
				Token::Str("category"),
				Token::Str("venue"),
				Token::Str("estimatedCents"),
				Token::I64(250_000),
				Token::Str("actualCents"),
				Token::None,
				Token::StructEnd,
			],
		);
	}
}
