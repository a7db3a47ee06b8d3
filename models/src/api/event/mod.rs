use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use time::OffsetDateTime;

use crate::{prelude::*, utils::impl_sqlx_type_as_text};

/// All endpoints related to the budget of an event
mod budget;
/// All endpoints related to the organizer message board of an event
mod message;
/// All endpoints related to the permissions granted on an event
mod permission;
/// All endpoints related to the resources of an event and their bookings
mod resource;
/// All endpoints related to the organizing team of an event
mod role;
/// All endpoints related to the tasks of an event
mod task;

/// The endpoint to create a new event
mod create_event;
/// The endpoint to delete an event
mod delete_event;
/// The endpoint to get the details of an event
mod get_event_info;
/// The endpoint to list the attendees of an event
mod list_event_attendees;
/// The endpoint to list all events visible to the user
mod list_events;
/// The endpoint to register the current user as an attendee of an event
mod register_for_event;
/// The endpoint to update the details of an event
mod update_event;

pub use self::{
	budget::*,
	create_event::*,
	delete_event::*,
	get_event_info::*,
	list_event_attendees::*,
	list_events::*,
	message::*,
	permission::*,
	register_for_event::*,
	resource::*,
	role::*,
	task::*,
	update_event::*,
};

/// The lifecycle status of an event. Events start out as drafts, visible only
/// to the owner and the organizing team. Publishing makes the event visible to
/// everyone and opens registration. Cancelling is final.
#[derive(
	Eq,
	Ord,
	Copy,
	Hash,
	Debug,
	Clone,
	Display,
	PartialEq,
	Serialize,
	PartialOrd,
	EnumString,
	Deserialize,
	VariantNames,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
	/// The event is being put together and is not visible to regular users yet
	Draft,
	/// The event is live. Anyone can see it and register to attend
	Published,
	/// The event is called off. It stays visible to the people involved, but
	/// nothing about it can change anymore
	Cancelled,
}

impl_sqlx_type_as_text!(EventStatus);

/// The details of an event. This is the central object of the application.
/// Everything else, like budgets, resources, tasks and the organizer board,
/// hangs off an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	/// The user ID of the user that owns the event. The owner can do
	/// everything on the event, including granting permissions to others
	pub owner_id: Uuid,
	/// The name of the event
	pub name: String,
	/// A description of the event, shown to users browsing it
	pub description: String,
	/// Where the event takes place
	pub venue: String,
	/// When the event starts
	pub starts: OffsetDateTime,
	/// When the event ends. Always after the start time
	pub ends: OffsetDateTime,
	/// The lifecycle status of the event
	pub status: EventStatus,
	/// When the event was created
	pub created: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{Event, EventStatus};
	use crate::prelude::*;

	#[test]
	fn assert_event_status_types() {
		for (status, serialized) in [
			(EventStatus::Draft, "draft"),
			(EventStatus::Published, "published"),
			(EventStatus::Cancelled, "cancelled"),
		] {
			assert_tokens(
				&status,
				&[Token::UnitVariant {
					name: "EventStatus",
					variant: serialized,
				}],
			);
		}
	}

	#[test]
	fn assert_event_types() {
		assert_tokens(
			&Event {
				owner_id: Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
					.unwrap(),
				name: "RustConf".to_string(),
				description: "The annual Rust conference".to_string(),
				venue: "Montreal Convention Centre".to_string(),
				starts: OffsetDateTime::UNIX_EPOCH,
				ends: OffsetDateTime::UNIX_EPOCH,
				status: EventStatus::Published,
				created: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Struct {
					name: "Event",
					len: 8,
				},
				Token::Str("ownerId"),
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("name"),
				Token::Str("RustConf"),
				Token::Str("description"),
				Token::Str("The annual Rust conference"),
				Token::Str("venue"),
				Token::Str("Montreal Convention Centre"),
				Token::Str("starts"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("ends"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("status"),
				Token::UnitVariant {
					name: "EventStatus",
					variant: "published",
				},
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::StructEnd,
			],
		);
	}
}
