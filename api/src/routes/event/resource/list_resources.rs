use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};

use crate::prelude::*;

pub async fn list_resources(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListResourcesPath { event_id },
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListResourcesRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListResourcesRequest>,
) -> Result<AppResponse<ListResourcesRequest>, ErrorType> {
	info!("Listing resources of event `{}`", event_id);

	let mut total_count = 0;
	let resources = query(
		r#"
		SELECT
			id,
			name,
			kind,
			capacity,
			COUNT(*) OVER() AS total_count
		FROM
			resource
		WHERE
			event_id = $1
		ORDER BY
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
			EventResource {
				name: row.try_get::<String, _>("name")?,
				kind: row.try_get::<String, _>("kind")?,
				capacity: row.try_get::<Option<i32>, _>("capacity")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListResourcesResponse { resources })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
