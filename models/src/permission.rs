use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{
	Display,
	EnumIter,
	EnumMessage,
	EnumString,
	IntoEnumIterator,
	VariantNames,
};

use crate::utils::impl_sqlx_type_as_text;

/// A list of all permissions that can be granted on an event. Every permission
/// is granted to a specific user on a specific event, and carries an explicit
/// allowed or denied value. A user holding none of these can still attend
/// events; these only gate the management surfaces.
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	Display,
	EnumIter,
	PartialEq,
	Serialize,
	PartialOrd,
	EnumString,
	EnumMessage,
	Deserialize,
	VariantNames,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Permission {
	/// This permission allows the user to see the budget of an event, including
	/// every budget item and the running totals.
	ViewBudget,
	/// This permission allows the user to add, change and remove budget items
	/// of an event. It does not include seeing the budget, which is a separate
	/// permission.
	EditBudget,
	/// This permission allows the user to add resources to an event and request
	/// bookings against them.
	ManageResources,
	/// This permission allows the user to confirm or reject booking requests
	/// for the resources of an event.
	ApproveBookings,
	/// This permission allows the user to create tasks for an event, assign
	/// them to organizers, and update their status.
	ManageTasks,
	/// This permission allows the user to see the attendee list of an event.
	/// Registering to attend is open to any user and needs no permission.
	ManageAttendees,
	/// This permission allows the user to change the details of an event, such
	/// as its name, description, venue and schedule, and to publish or cancel
	/// it. Deleting an event is reserved for its owner.
	EditEvent,
	/// This permission allows the user to post messages on the organizer board
	/// of an event. Reading the board comes with any role on the event.
	PostMessages,
}

impl Permission {
	/// Returns a list of all permissions that can be granted on an event.
	pub fn list_all() -> Vec<Self> {
		Self::iter().collect()
	}

	/// Returns the description of the permission, as per the documentation of
	/// the permission.
	pub fn description(&self) -> String {
		self.get_documentation()
			.expect("Documentation not found")
			.to_string()
	}
}

impl_sqlx_type_as_text!(Permission);

/// A role a user can hold on an event. Roles are coarse labels. They identify
/// who is part of the organizing team, while [`Permission`] grants decide what
/// each of them can actually do.
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	Display,
	EnumIter,
	PartialEq,
	Serialize,
	PartialOrd,
	EnumString,
	EnumMessage,
	Deserialize,
	VariantNames,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum EventRole {
	/// The user helps run the event. Organizers see the organizer board and
	/// show up in task assignment and permission grant listings.
	Organizer,
	/// The user administers the event on behalf of the owner. Like organizers,
	/// admins act under whatever permission grants they hold; the label itself
	/// does not bypass permission checks.
	Admin,
}

impl_sqlx_type_as_text!(EventRole);

/// Represents the kind of access a user has on a specific event. This is what
/// the authorization check evaluates: either the user owns the event, or they
/// collaborate on it with a set of roles and explicit permission grants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum EventAccess {
	/// The user created the event and has full access to it. No permission
	/// check applies to the owner.
	Owner,
	/// The user collaborates on the event. What they can do is decided only by
	/// their permission grants, looked up verbatim.
	Collaborator {
		/// The roles the user holds on the event. A user can hold both roles
		/// at once.
		roles: BTreeSet<EventRole>,
		/// The permission grants of the user on the event. A missing entry
		/// means denied, and an explicit `false` entry means denied just the
		/// same.
		permissions: BTreeMap<Permission, bool>,
	},
}

impl EventAccess {
	/// Returns true if the user is the owner of the event.
	pub fn is_owner(&self) -> bool {
		matches!(self, EventAccess::Owner)
	}

	/// Returns true if the user holds the admin role on the event. The owner
	/// outranks every role, so this is always true for the owner.
	pub fn is_admin(&self) -> bool {
		match self {
			EventAccess::Owner => true,
			EventAccess::Collaborator { roles, .. } => {
				roles.contains(&EventRole::Admin)
			}
		}
	}

	/// Returns true if the user holds the organizer role on the event. The
	/// owner outranks every role, so this is always true for the owner.
	pub fn is_organizer(&self) -> bool {
		match self {
			EventAccess::Owner => true,
			EventAccess::Collaborator { roles, .. } => {
				roles.contains(&EventRole::Organizer)
			}
		}
	}

	/// Returns true if this access level allows the given permission. The
	/// owner is allowed everything. A collaborator is allowed exactly what
	/// their grants say: a grant of `true` allows, a grant of `false` denies,
	/// and no grant at all denies.
	pub fn allows(&self, permission: Permission) -> bool {
		match self {
			EventAccess::Owner => true,
			EventAccess::Collaborator { permissions, .. } => {
				permissions.get(&permission).copied().unwrap_or(false)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::{BTreeMap, BTreeSet};

	use serde_test::{assert_tokens, Token};
	use strum::IntoEnumIterator;

	use super::{EventAccess, EventRole, Permission};

	#[test]
	fn assert_permission_serialized() {
		assert_tokens(
			&Permission::EditBudget,
			&[Token::UnitVariant {
				name: "Permission",
				variant: "editBudget",
			}],
		);
		assert_tokens(
			&Permission::ApproveBookings,
			&[Token::UnitVariant {
				name: "Permission",
				variant: "approveBookings",
			}],
		);
	}

	#[test]
	fn assert_event_role_serialized() {
		assert_tokens(
			&EventRole::Organizer,
			&[Token::UnitVariant {
				name: "EventRole",
				variant: "organizer",
			}],
		);
	}

	#[test]
	fn collaborator_without_grants_is_denied_everything() {
		let access = EventAccess::Collaborator {
			roles: BTreeSet::from([EventRole::Organizer]),
			permissions: BTreeMap::new(),
		};
		for permission in Permission::iter() {
			assert!(!access.allows(permission));
		}
	}

	#[test]
	fn explicit_false_grant_denies() {
		let access = EventAccess::Collaborator {
			roles: BTreeSet::from([EventRole::Admin]),
			permissions: BTreeMap::from([
				(Permission::EditBudget, false),
				(Permission::ViewBudget, true),
			]),
		};
		assert!(!access.allows(Permission::EditBudget));
		assert!(access.allows(Permission::ViewBudget));
	}

	#[test]
	fn regranting_overwrites_the_previous_grant() {
		let mut permissions = BTreeMap::new();
		permissions.insert(Permission::EditBudget, true);
		permissions.insert(Permission::EditBudget, false);
		assert_eq!(permissions.len(), 1);

		let access = EventAccess::Collaborator {
			roles: BTreeSet::new(),
			permissions,
		};
		assert!(!access.allows(Permission::EditBudget));
	}

	#[test]
	fn changed_grants_apply_on_the_next_check() {
		let mut permissions = BTreeMap::from([(Permission::ManageTasks, true)]);
		let access = EventAccess::Collaborator {
			roles: BTreeSet::new(),
			permissions: permissions.clone(),
		};
		assert!(access.allows(Permission::ManageTasks));

		// Revoking a grant deletes the row, so the next lookup sees no entry
		permissions.remove(&Permission::ManageTasks);
		let access = EventAccess::Collaborator {
			roles: BTreeSet::new(),
			permissions,
		};
		assert!(!access.allows(Permission::ManageTasks));
	}

	#[test]
	fn owner_is_allowed_everything() {
		let access = EventAccess::Owner;
		assert!(access.is_owner());
		assert!(access.is_admin());
		assert!(access.is_organizer());
		for permission in Permission::iter() {
			assert!(access.allows(permission));
		}
	}

	#[test]
	fn roles_do_not_imply_permissions() {
		let access = EventAccess::Collaborator {
			roles: BTreeSet::from([EventRole::Organizer, EventRole::Admin]),
			permissions: BTreeMap::new(),
		};
		assert!(access.is_admin());
		assert!(access.is_organizer());
		assert!(!access.is_owner());
		assert!(!access.allows(Permission::EditEvent));
	}
}
