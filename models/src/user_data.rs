use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typed_builder::TypedBuilder;

use crate::prelude::*;

/// The data of the user that is attached to every authenticated request once
/// the access token has been verified. Event access is deliberately not part
/// of this; it is looked up fresh against the database for the event the
/// request acts on, so permission changes apply to the very next request.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RequestUserData {
	/// The userId of the user
	pub id: Uuid,
	/// The username of the user
	pub username: String,
	/// The first name of the user
	pub first_name: String,
	/// The last name of the user
	pub last_name: String,
	/// When the user account was created
	pub created: OffsetDateTime,
	/// The loginId of the login session the access token was minted for
	pub login_id: Uuid,
}
