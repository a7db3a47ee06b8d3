use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to delete an event. Everything hanging off the event, from
/// bookings to notifications referencing it, is removed or detached along
/// with it.
pub async fn delete_event(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: DeleteEventPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: DeleteEventRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, DeleteEventRequest>,
) -> Result<AppResponse<DeleteEventRequest>, ErrorType> {
	info!("Deleting event `{}`", event_id);

	query(
		r#"
		DELETE FROM
			resource_booking
		WHERE
			resource_id IN (
				SELECT
					id
				FROM
					resource
				WHERE
					event_id = $1
			);
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Resource bookings deleted");

	query(
		r#"
		DELETE FROM
			resource
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Resources deleted");

	query(
		r#"
		DELETE FROM
			task
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Tasks deleted");

	query(
		r#"
		DELETE FROM
			event_message
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Messages deleted");

	query(
		r#"
		DELETE FROM
			budget_item
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Budget items deleted");

	query(
		r#"
		DELETE FROM
			event_permission
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Permission grants deleted");

	query(
		r#"
		DELETE FROM
			event_role
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Roles deleted");

	query(
		r#"
		DELETE FROM
			event_attendee
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Attendees deleted");

	// Notifications keep their text, but no longer point at the event
	query(
		r#"
		UPDATE
			notification
		SET
			event_id = NULL
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Notifications detached");

	query(
		r#"
		DELETE FROM
			event
		WHERE
			id = $1;
		"#,
	)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Event deleted");

	AppResponse::builder()
		.body(DeleteEventResponse {})
		.headers(())
		.status_code(StatusCode::RESET_CONTENT)
		.build()
		.into_result()
}
