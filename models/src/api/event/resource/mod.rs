use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use time::OffsetDateTime;

use crate::{prelude::*, utils::impl_sqlx_type_as_text};

/// The endpoint to request a booking of a resource
mod book_resource;
/// The endpoint to add a resource to an event
mod create_resource;
/// The endpoint to list the bookings of a resource
mod list_resource_bookings;
/// The endpoint to list the resources of an event
mod list_resources;
/// The endpoint to confirm, reject or cancel a booking
mod update_booking_status;

pub use self::{
	book_resource::*,
	create_resource::*,
	list_resource_bookings::*,
	list_resources::*,
	update_booking_status::*,
};

/// The status of a booking. Bookings start out pending and are then either
/// confirmed or rejected by someone allowed to approve them. Pending and
/// confirmed bookings can be cancelled. Rejected and cancelled are final.
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
pub enum BookingStatus {
	/// The booking is requested but nobody has decided on it yet. It already
	/// holds its time window
	Pending,
	/// The booking is approved and holds its time window
	Confirmed,
	/// The booking was turned down. It holds nothing
	Rejected,
	/// The booking was called off by the requester or an approver. It holds
	/// nothing
	Cancelled,
}

impl_sqlx_type_as_text!(BookingStatus);

impl BookingStatus {
	/// Returns whether a booking in this status holds its time window against
	/// other bookings. A pending booking already blocks, so that two requests
	/// for the same slot cannot both get confirmed later.
	pub fn blocks_resource(self) -> bool {
		match self {
			Self::Pending | Self::Confirmed => true,
			Self::Rejected | Self::Cancelled => false,
		}
	}

	/// Returns whether a booking in this status is allowed to move to the
	/// given status. Rejected and cancelled bookings cannot change at all
	/// anymore, and a booking never transitions to its own status.
	pub fn can_change_to(self, new_status: Self) -> bool {
		match (self, new_status) {
			(Self::Pending, Self::Confirmed | Self::Rejected) => true,
			(Self::Pending | Self::Confirmed, Self::Cancelled) => true,
			_ => false,
		}
	}
}

/// Returns whether two time windows overlap. Windows are half-open, so a
/// window that starts exactly when another one ends does not overlap it. A
/// window never overlaps anything if it is empty or inverted.
pub fn windows_overlap(
	first_starts: OffsetDateTime,
	first_ends: OffsetDateTime,
	second_starts: OffsetDateTime,
	second_ends: OffsetDateTime,
) -> bool {
	first_starts < second_ends && second_starts < first_ends
}

/// A bookable resource of an event, like a hall, a projector or a van.
/// Bookings reserve a resource for a window of time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventResource {
	/// The name of the resource
	pub name: String,
	/// What kind of resource this is, like room or equipment
	pub kind: String,
	/// How many people or units the resource holds, if that makes sense for
	/// its kind
	pub capacity: Option<i32>,
}

/// A booking of a resource for a window of time. The ID of the surrounding
/// [`WithId`] is the booking ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBooking {
	/// The ID of the resource the booking is for
	pub resource_id: Uuid,
	/// The user ID of the user that requested the booking
	pub booked_by: Uuid,
	/// When the booking starts
	pub starts: OffsetDateTime,
	/// When the booking ends. The window is half-open, so another booking may
	/// start at this exact time
	pub ends: OffsetDateTime,
	/// A note about what the booking is for
	pub note: Option<String>,
	/// The status of the booking
	pub status: BookingStatus,
	/// When the booking was requested
	pub created: OffsetDateTime,
}

impl ResourceBooking {
	/// Returns whether this booking keeps the given window from being booked.
	/// Only pending and confirmed bookings hold their window, and only
	/// against windows they actually overlap.
	pub fn blocks_window(
		&self,
		starts: OffsetDateTime,
		ends: OffsetDateTime,
	) -> bool {
		self.status.blocks_resource() &&
			windows_overlap(self.starts, self.ends, starts, ends)
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};
	use time::{Duration, OffsetDateTime};

	use super::{windows_overlap, BookingStatus, ResourceBooking};
	use crate::prelude::*;

	/// A time window of the given hour range, on some arbitrary day.
	fn window(
		from_hour: i64,
		to_hour: i64,
	) -> (OffsetDateTime, OffsetDateTime) {
		(
			OffsetDateTime::UNIX_EPOCH + Duration::hours(from_hour),
			OffsetDateTime::UNIX_EPOCH + Duration::hours(to_hour),
		)
	}

	fn booking(
		status: BookingStatus,
		from_hour: i64,
		to_hour: i64,
	) -> ResourceBooking {
		let (starts, ends) = window(from_hour, to_hour);
		ResourceBooking {
			resource_id: Uuid::nil(),
			booked_by: Uuid::nil(),
			starts,
			ends,
			note: None,
			status,
			created: OffsetDateTime::UNIX_EPOCH,
		}
	}

	#[test]
	fn assert_booking_status_types() {
		for (status, serialized) in [
			(BookingStatus::Pending, "pending"),
			(BookingStatus::Confirmed, "confirmed"),
			(BookingStatus::Rejected, "rejected"),
			(BookingStatus::Cancelled, "cancelled"),
		] {
			assert_tokens(
				&status,
				&[Token::UnitVariant {
					name: "BookingStatus",
					variant: serialized,
				}],
			);
		}
	}

	#[test]
	fn overlapping_windows_overlap_both_ways() {
		let (a_starts, a_ends) = window(9, 12);
		let (b_starts, b_ends) = window(11, 14);

		assert!(windows_overlap(a_starts, a_ends, b_starts, b_ends));
		assert!(windows_overlap(b_starts, b_ends, a_starts, a_ends));
	}

	#[test]
	fn contained_windows_overlap() {
		let (outer_starts, outer_ends) = window(9, 17);
		let (inner_starts, inner_ends) = window(11, 12);

		assert!(windows_overlap(
			outer_starts,
			outer_ends,
			inner_starts,
			inner_ends
		));
		assert!(windows_overlap(
			inner_starts,
			inner_ends,
			outer_starts,
			outer_ends
		));
	}

	#[test]
	fn adjacent_windows_do_not_overlap() {
		let (a_starts, a_ends) = window(9, 12);
		let (b_starts, b_ends) = window(12, 14);

		assert!(!windows_overlap(a_starts, a_ends, b_starts, b_ends));
		assert!(!windows_overlap(b_starts, b_ends, a_starts, a_ends));
	}

	#[test]
	fn disjoint_windows_do_not_overlap() {
		let (a_starts, a_ends) = window(9, 10);
		let (b_starts, b_ends) = window(13, 14);

		assert!(!windows_overlap(a_starts, a_ends, b_starts, b_ends));
		assert!(!windows_overlap(b_starts, b_ends, a_starts, a_ends));
	}

	#[test]
	fn pending_and_confirmed_bookings_block_their_window() {
		let (starts, ends) = window(10, 11);

		assert!(booking(BookingStatus::Pending, 9, 12)
			.blocks_window(starts, ends));
		assert!(booking(BookingStatus::Confirmed, 9, 12)
			.blocks_window(starts, ends));
	}

	#[test]
	fn rejected_and_cancelled_bookings_never_block() {
		let (starts, ends) = window(10, 11);

		assert!(!booking(BookingStatus::Rejected, 9, 12)
			.blocks_window(starts, ends));
		assert!(!booking(BookingStatus::Cancelled, 9, 12)
			.blocks_window(starts, ends));
	}

	#[test]
	fn blocking_bookings_do_not_block_disjoint_windows() {
		let (starts, ends) = window(14, 15);

		assert!(!booking(BookingStatus::Confirmed, 9, 12)
			.blocks_window(starts, ends));
	}

	#[test]
	fn pending_bookings_can_be_decided_or_called_off() {
		assert!(BookingStatus::Pending
			.can_change_to(BookingStatus::Confirmed));
		assert!(BookingStatus::Pending.can_change_to(BookingStatus::Rejected));
		assert!(BookingStatus::Pending
			.can_change_to(BookingStatus::Cancelled));
	}

	#[test]
	fn confirmed_bookings_can_only_be_cancelled() {
		assert!(BookingStatus::Confirmed
			.can_change_to(BookingStatus::Cancelled));
		assert!(!BookingStatus::Confirmed
			.can_change_to(BookingStatus::Pending));
		assert!(!BookingStatus::Confirmed
			.can_change_to(BookingStatus::Rejected));
	}

	#[test]
	fn final_statuses_cannot_change() {
		for status in [BookingStatus::Rejected, BookingStatus::Cancelled] {
			for new_status in [
				BookingStatus::Pending,
				BookingStatus::Confirmed,
				BookingStatus::Rejected,
				BookingStatus::Cancelled,
			] {
				assert!(!status.can_change_to(new_status));
			}
		}
	}

	#[test]
	fn statuses_never_change_to_themselves() {
		for status in [
			BookingStatus::Pending,
			BookingStatus::Confirmed,
			BookingStatus::Rejected,
			BookingStatus::Cancelled,
		] {
			assert!(!status.can_change_to(status));
		}
	}
}
