use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

/// The handler to list the tasks of an event. Tasks are ordered by their
/// deadline, with undated tasks at the end.
pub async fn list_tasks(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListTasksPath { event_id },
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListTasksRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListTasksRequest>,
) -> Result<AppResponse<ListTasksRequest>, ErrorType> {
	info!("Listing tasks of event `{}`", event_id);

	let mut total_count = 0;
	let tasks = query(
		r#"
		SELECT
			id,
			title,
			description,
			assigned_to,
			due,
			status,
			created,
			COUNT(*) OVER() AS total_count
		FROM
			task
		WHERE
			event_id = $1
		ORDER BY
			due ASC NULLS LAST,
			created ASC
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
			row.try_get::<Uuid, _>("id")?,
			EventTask {
				title: row.try_get::<String, _>("title")?,
				description: row.try_get::<Option<String>, _>("description")?,
				assigned_to: row.try_get::<Option<Uuid>, _>("assigned_to")?,
				due: row.try_get::<Option<OffsetDateTime>, _>("due")?,
				status: row.try_get::<TaskStatus, _>("status")?,
				created: row.try_get::<OffsetDateTime, _>("created")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListTasksResponse { tasks })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
