use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::prelude::*;

/// The endpoint to grant or deny a permission to a user on an event
mod grant_event_permission;
/// The endpoint to list the permissions granted on an event
mod list_event_permissions;
/// The endpoint to remove a permission grant from a user on an event
mod revoke_event_permission;

pub use self::{
	grant_event_permission::*,
	list_event_permissions::*,
	revoke_event_permission::*,
};

/// A permission grant on an event. Each grant gives or explicitly denies one
/// user one permission. A user with no grant for a permission does not have
/// that permission, so an explicit deny only matters as a way to pin the
/// decision down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventPermissionGrant {
	/// The user ID of the user the permission is granted to
	pub user_id: Uuid,
	/// The permission being granted or denied
	pub permission: Permission,
	/// Whether the permission is given or explicitly denied
	pub allowed: bool,
	/// The user ID of the user that made the grant. Grants are only ever made
	/// by the owner of the event
	pub granted_by: Uuid,
	/// When the grant was made
	pub granted: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::EventPermissionGrant;
	use crate::prelude::*;

	#[test]
	fn assert_event_permission_grant_types() {
		assert_tokens(
			&EventPermissionGrant {
				user_id: Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
					.unwrap(),
				permission: Permission::EditBudget,
				allowed: true,
				granted_by: Uuid::parse_str("8aef18631ded45eb9170dc2166b30867")
					.unwrap(),
				granted: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Struct {
					name: "EventPermissionGrant",
					len: 5,
				},
				Token::Str("userId"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("permission"),
				Token::UnitVariant {
					name: "Permission",
					variant: "editBudget",
				},
				Token::Str("allowed"),
				Token::Bool(true),
				Token::Str("grantedBy"),
				Token::Str("8aef18631ded45eb9170dc2166b30867"),
				Token::Str("granted"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::StructEnd,
			],
		);
	}
}
