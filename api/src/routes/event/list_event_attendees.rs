use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn list_event_attendees(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListEventAttendeesPath { event_id },
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListEventAttendeesRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListEventAttendeesRequest>,
) -> Result<AppResponse<ListEventAttendeesRequest>, ErrorType> {
	info!("Listing attendees of event `{}`", event_id);

	let mut total_count = 0;
	let attendees = query(
		r#"
		SELECT
			event_attendee.user_id,
			"user".username,
			"user".first_name,
			"user".last_name,
			event_attendee.registered,
			COUNT(*) OVER() AS total_count
		FROM
			event_attendee
		INNER JOIN
			"user"
		ON
			event_attendee.user_id = "user".id
		WHERE
			event_attendee.event_id = $1
		ORDER BY
			event_attendee.registered ASC
		LIMIT $2
		OFFSET $3;
		"#,
	)
	.bind(event_id)
	.bind(count as i32)
	.bind((count * page) as i32)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| {
		total_count = row.try_get::<i64, _>("total_count")?;
		Ok(WithId::new(
			row.try_get::<Uuid, _>("user_id")?,
			EventAttendee {
				username: row.try_get::<String, _>("username")?,
				first_name: row.try_get::<String, _>("first_name")?,
				last_name: row.try_get::<String, _>("last_name")?,
				registered: row.try_get::<OffsetDateTime, _>("registered")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListEventAttendeesResponse { attendees })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
