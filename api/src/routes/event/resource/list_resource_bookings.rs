use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn list_resource_bookings(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListResourceBookingsPath {
					event_id,
					resource_id,
				},
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListResourceBookingsRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListResourceBookingsRequest>,
) -> Result<AppResponse<ListResourceBookingsRequest>, ErrorType> {
	info!(
		"Listing bookings of resource `{}` of event `{}`",
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

	let mut total_count = 0;
	let bookings = query(
		r#"
		SELECT
			id,
			resource_id,
			booked_by,
			starts,
			ends,
			note,
			status,
			created,
			COUNT(*) OVER() AS total_count
		FROM
			resource_booking
		WHERE
			resource_id = $1
		ORDER BY
			starts ASC
		LIMIT $2
		OFFSET $3;
		"#,
	)
	.bind(resource_id)
	.bind(count as i32)
	.bind((count * page) as i32)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| {
		total_count = row.try_get::<i64, _>("total_count")?;
		Ok(WithId::new(
			row.try_get::<Uuid, _>("id")?,
			ResourceBooking {
				resource_id: row.try_get::<Uuid, _>("resource_id")?,
				booked_by: row.try_get::<Uuid, _>("booked_by")?,
				starts: row.try_get::<OffsetDateTime, _>("starts")?,
				ends: row.try_get::<OffsetDateTime, _>("ends")?,
				note: row.try_get::<Option<String>, _>("note")?,
				status: row.try_get::<BookingStatus, _>("status")?,
				created: row.try_get::<OffsetDateTime, _>("created")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListResourceBookingsResponse { bookings })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
