use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to decide on a booking. Approvers confirm or reject pending
/// bookings, and can call off pending or confirmed ones. A booking that is
/// already rejected or cancelled cannot change anymore. The booker is
/// notified of the decision.
pub async fn update_booking_status(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path:
					UpdateBookingStatusPath {
						event_id,
						resource_id,
						booking_id,
					},
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: UpdateBookingStatusRequestProcessed { status },
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, UpdateBookingStatusRequest>,
) -> Result<AppResponse<UpdateBookingStatusRequest>, ErrorType> {
	info!(
		"Updating booking `{}` of resource `{}` to `{}`",
		booking_id, resource_id, status
	);

	let row = query(
		r#"
		SELECT
			resource_booking.booked_by,
			resource_booking.status,
			resource.name
		FROM
			resource_booking
		INNER JOIN
			resource
		ON
			resource_booking.resource_id = resource.id
		WHERE
			resource_booking.id = $1 AND
			resource_booking.resource_id = $2 AND
			resource.event_id = $3;
		"#,
	)
	.bind(booking_id)
	.bind(resource_id)
	.bind(event_id)
	.fetch_optional(&mut **database)
	.await?
	.ok_or(ErrorType::ResourceDoesNotExist)?;

	let current_status = row.try_get::<BookingStatus, _>("status")?;

	if !current_status.can_change_to(status) {
		debug!(
			"Booking `{}` cannot change from `{}` to `{}`",
			booking_id, current_status, status
		);
		return Err(ErrorType::InvalidStatusTransition);
	}

	query(
		r#"
		UPDATE
			resource_booking
		SET
			status = $1
		WHERE
			id = $2;
		"#,
	)
	.bind(status)
	.bind(booking_id)
	.execute(&mut **database)
	.await?;

	trace!("Booking `{}` is now `{}`", booking_id, status);

	let booked_by = row.try_get::<Uuid, _>("booked_by")?;
	if booked_by != user_data.id {
		db::add_notification(
			&mut **database,
			&booked_by,
			Some(&event_id),
			&format!(
				"Your booking of {} was {}",
				row.try_get::<String, _>("name")?,
				status
			),
		)
		.await?;

		trace!("Booker notified");
	}

	AppResponse::builder()
		.body(UpdateBookingStatusResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
