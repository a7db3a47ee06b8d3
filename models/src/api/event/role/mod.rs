use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The endpoint to add a user to the organizing team of an event
mod add_event_role;
/// The endpoint to list the organizing team of an event
mod list_event_roles;
/// The endpoint to remove a user from the organizing team of an event
mod remove_event_role;

pub use self::{
	add_event_role::*,
	list_event_roles::*,
	remove_event_role::*,
};

/// A member of the organizing team of an event, along with every role they
/// hold on it. The ID of the surrounding [`WithId`] is the user ID of the
/// member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventRoleMember {
	/// The username of the team member
	pub username: String,
	/// The roles the user holds on the event
	pub roles: BTreeSet<EventRole>,
}

#[cfg(test)]
mod test {
	use std::collections::BTreeSet;

	use serde_test::{assert_tokens, Token};

	use super::EventRoleMember;
	use crate::prelude::*;

	#[test]
	fn assert_event_role_member_types() {
		assert_tokens(
			&EventRoleMember {
				username: "john-doe".to_string(),
				roles: BTreeSet::from([EventRole::Organizer, EventRole::Admin]),
			},
			&[
				Token::Struct {
					name: "EventRoleMember",
					len: 2,
				},
				Token::Str("username"),
				Token::Str("john-doe"),
				Token::Str("roles"),
				Token::Seq { len: Some(2) },
				Token::UnitVariant {
					name: "EventRole",
					variant: "organizer",
				},
				Token::UnitVariant {
					name: "EventRole",
					variant: "admin",
				},
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
