use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use time::OffsetDateTime;

use crate::{prelude::*, utils::impl_sqlx_type_as_text};

/// The endpoint to create a task on an event
mod create_task;
/// The endpoint to list the tasks of an event
mod list_tasks;
/// The endpoint to update a task on an event
mod update_task;

pub use self::{create_task::*, list_tasks::*, update_task::*};

/// The status of a task. Tasks move freely between statuses, since planning
/// work gets reopened all the time.
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
pub enum TaskStatus {
	/// Nobody has started on the task yet
	Todo,
	/// The task is being worked on
	InProgress,
	/// The task is finished
	Done,
}

impl_sqlx_type_as_text!(TaskStatus);

/// A task on the todo list of an event, optionally assigned to a member of
/// the organizing team and optionally carrying a deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventTask {
	/// What needs to be done
	pub title: String,
	/// More detail about the task, if the title is not enough
	pub description: Option<String>,
	/// The user ID of the team member the task is assigned to
	pub assigned_to: Option<Uuid>,
	/// When the task has to be done by
	pub due: Option<OffsetDateTime>,
	/// The status of the task
	pub status: TaskStatus,
	/// When the task was created
	pub created: OffsetDateTime,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use time::OffsetDateTime;

	use super::{EventTask, TaskStatus};
	use crate::prelude::*;

	#[test]
	fn assert_task_status_types() {
		for (status, serialized) in [
			(TaskStatus::Todo, "todo"),
			(TaskStatus::InProgress, "inProgress"),
			(TaskStatus::Done, "done"),
		] {
			assert_tokens(
				&status,
				&[Token::UnitVariant {
					name: "TaskStatus",
					variant: serialized,
				}],
			);
		}
	}

	#[test]
	fn assert_event_task_types() {
		assert_tokens(
			&EventTask {
				title: "Order badges".to_string(),
				description: None,
				assigned_to: Some(
					Uuid::parse_str("2aef18631ded45eb9170dc2166b30867")
						.unwrap(),
				),
				due: Some(OffsetDateTime::UNIX_EPOCH),
				status: TaskStatus::InProgress,
				created: OffsetDateTime::UNIX_EPOCH,
			}
			.readable(),
			&[
				Token::Struct {
					name: "EventTask",
					len: 6,
				},
				Token::Str("title"),
				Token::Str("Order badges"),
				Token::Str("description"),
				Token::None,
				Token::Str("assignedTo"),
				Token::Some,
				Token::Str("2aef18631ded45eb9170dc2166b30867"),
				Token::Str("due"),
				Token::Some,
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::Str("status"),
				Token::UnitVariant {
					name: "TaskStatus",
					variant: "inProgress",
				},
				Token::Str("created"),
				Token::Str("1970-01-01 00:00:00.0 +00:00:00"),
				Token::StructEnd,
			],
		);
	}
}
