use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to request a booking of a resource. The requested window is
/// checked against every pending and confirmed booking of the resource up
/// front, so the usual outcome of asking for a taken slot is a friendly
/// conflict error. Two concurrent requests for the same slot can both pass
/// that check, so the exclusion constraint on the table decides the loser,
/// which maps to the same conflict error.
pub async fn book_resource(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: BookResourcePath {
					event_id,
					resource_id,
				},
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					BookResourceRequestProcessed {
						starts,
						ends,
						note,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, BookResourceRequest>,
) -> Result<AppResponse<BookResourceRequest>, ErrorType> {
	info!(
		"Booking resource `{}` of event `{}`",
		resource_id, event_id
	);

	let resource_exists = query(
		r#"
		SELECT
			id
		FROM
			resource
		WHERE
			id = $1 AND
			event_id = $2;
		"#,
	)
	.bind(resource_id)
	.bind(event_id)
	.fetch_optional(&mut **database)
	.await?
	.is_some();

	if !resource_exists {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	if starts >= ends {
		debug!("Booking window ends before it starts");
		return Err(ErrorType::WrongParameters);
	}

	let conflicting = query(
		r#"
		SELECT
			id
		FROM
			resource_booking
		WHERE
			resource_id = $1 AND
			status IN ('pending', 'confirmed') AND
			starts < $3 AND
			$2 < ends;
		"#,
	)
	.bind(resource_id)
	.bind(starts)
	.bind(ends)
	.fetch_optional(&mut **database)
	.await?
	.is_some();

	if conflicting {
		debug!("Requested window is already taken");
		return Err(ErrorType::BookingConflict);
	}

	let booking_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			resource_booking(
				id,
				resource_id,
				booked_by,
				starts,
				ends,
				note,
				status,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, $6, $7, NOW());
		"#,
	)
	.bind(booking_id)
	.bind(resource_id)
	.bind(user_data.id)
	.bind(starts)
	.bind(ends)
	.bind(&note)
	.bind(BookingStatus::Pending)
	.execute(&mut **database)
	.await
	.map_err(|err| match err {
		// 23P01 is an exclusion constraint violation, which means a
		// concurrent booking got the window first
		sqlx::Error::Database(err)
			if err.code().as_deref() == Some("23P01") =>
		{
			ErrorType::BookingConflict
		}
		err => ErrorType::server_error(err),
	})?;

	trace!("Booking `{}` requested", booking_id);

	AppResponse::builder()
		.body(BookResourceResponse {
			id: WithId::from(booking_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
