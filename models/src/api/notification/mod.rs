//! In-app notifications. The server creates one whenever something happens
//! that a user should know about without having asked, such as being put on
//! an event's team or having a booking request decided.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::prelude::*;

/// The endpoint to list the notifications of the logged in user
mod list_notifications;
/// The endpoint to mark a notification as read
mod mark_notification_read;

pub use self::{list_notifications::*, mark_notification_read::*};

/// A notification delivered to a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
	/// The text of the notification
	pub message: String,
	/// The ID of the event the notification is about, if any
	#[serde(skip_serializing_if = "Option::is_none")]
	pub event_id: Option<Uuid>,
	/// Whether the user has marked the notification as read
	pub read: bool,
	/// The time the notification was created
	pub created: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::Notification;
	use crate::prelude::*;

	#[test]
	fn assert_notification_types() {
		assert_tokens(
			&Notification {
				message: "You have been added to the team of Expo 2026"
					.to_string(),
				event_id: Some(Uuid::nil()),
				read: false,
				created: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Struct {
					name: "Notification",
					len: 4,
				},
				Token::Str("message"),
				Token::Str("You have been added to the team of Expo 2026"),
				Token::Str("eventId"),
				Token::Some,
				Token::Str("00000000000000000000000000000000"),
				Token::Str("read"),
				Token::Bool(false),
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::StructEnd,
			],
		);
	}
}
