use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn list_events(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListEventsPath,
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListEventsRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, ListEventsRequest>,
) -> Result<AppResponse<ListEventsRequest>, ErrorType> {
	info!("Listing events for user `{}`", user_data.id);

	let mut total_count = 0;
	let events = query(
		r#"
		SELECT
			id,
			owner_id,
			name,
			description,
			venue,
			starts,
			ends,
			status,
			created,
			COUNT(*) OVER() AS total_count
		FROM
			event
		WHERE
			status = 'published' OR
			owner_id = $1 OR
			id IN (
				SELECT
					event_id
				FROM
					event_role
				WHERE
					user_id = $1
			)
		ORDER BY
			created DESC
		LIMIT $2
		OFFSET $3;
		"#,
	)
	.bind(user_data.id)
	.bind(count as i32)
	.bind((count * page) as i32)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| {
		total_count = row.try_get::<i64, _>("total_count")?;
		Ok(WithId::new(
			row.try_get::<Uuid, _>("id")?,
			Event {
				owner_id: row.try_get::<Uuid, _>("owner_id")?,
				name: row.try_get::<String, _>("name")?,
				description: row.try_get::<String, _>("description")?,
				venue: row.try_get::<String, _>("venue")?,
				starts: row.try_get::<OffsetDateTime, _>("starts")?,
				ends: row.try_get::<OffsetDateTime, _>("ends")?,
				status: row.try_get::<EventStatus, _>("status")?,
				created: row.try_get::<OffsetDateTime, _>("created")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListEventsResponse { events })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
