use serde::{Deserialize, Serialize};

/// The endpoint to add an item to the budget of an event
mod add_budget_item;
/// The endpoint to delete an item from the budget of an event
mod delete_budget_item;
/// The endpoint to list the budget of an event
mod list_budget_items;
/// The endpoint to update an item in the budget of an event
mod update_budget_item;

pub use self::{
	add_budget_item::*,
	delete_budget_item::*,
	list_budget_items::*,
	update_budget_item::*,
};

/// A single line in the budget of an event. Amounts are stored in cents to
/// avoid rounding problems. The estimated amount is what the item is planned
/// to cost, and the actual amount is filled in once the money is spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
	/// What the money is for
	pub description: String,
	/// The category the item belongs to, like catering or marketing
	pub category: String,
	/// The planned cost of the item, in cents
	pub estimated_cents: i64,
	/// What the item actually cost, in cents. Not set until the money is
	/// spent
	pub actual_cents: Option<i64>,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::BudgetItem;

	#[test]
	fn assert_budget_item_types() {
		assert_tokens(
			&BudgetItem {
				description: "Keynote hall rental".to_string(),
				category: "venue".to_string(),
				estimated_cents: 250_000,
				actual_cents: Some(238_500),
			},
			&[
				Token::Struct {
					name: "BudgetItem",
					len: 4,
				},
				Token::Str("description"),
				Token::Str("Keynote hall rental"),
				Token::Str("category"),
				Token::Str("venue"),
				Token::Str("estimatedCents"),
				Token::I64(250_000),
				Token::Str("actualCents"),
				Token::Some,
				Token::I64(238_500),
				Token::StructEnd,
			],
		);
	}
}
