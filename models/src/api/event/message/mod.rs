//! The message board shared by the team of an event. Every member of the
//! team can read the board, while posting needs an explicit grant.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::prelude::*;

/// The endpoint to list the messages posted on an event's board
mod list_event_messages;
/// The endpoint to post a message on an event's board
mod post_event_message;

pub use self::{list_event_messages::*, post_event_message::*};

/// A message posted on an event's board. Messages cannot be edited or
/// deleted once posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventMessage {
	/// The user ID of the team member who posted the message
	pub posted_by: Uuid,
	/// The text of the message
	pub body: String,
	/// The time the message was posted
	pub posted: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::EventMessage;
	use crate::prelude::*;

	#[test]
	fn assert_event_message_types() {
		assert_tokens(
			&EventMessage {
				posted_by: Uuid::nil(),
				body: "The caterer confirmed for Saturday".to_string(),
				posted: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Struct {
					name: "EventMessage",
					len: 3,
				},
				Token::Str("postedBy"),
				Token::Str("00000000000000000000000000000000"),
				Token::Str("body"),
				Token::Str("The caterer confirmed for Saturday"),
				Token::Str("posted"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::StructEnd,
			],
		);
	}
}
