use axum::http::StatusCode;
use models::api::{
	notification::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn list_notifications(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListNotificationsPath,
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListNotificationsRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, ListNotificationsRequest>,
) -> Result<AppResponse<ListNotificationsRequest>, ErrorType> {
	info!("Listing notifications of user `{}`", user_data.id);

	let mut total_count = 0;
	let notifications = query(
		r#"
		SELECT
			id,
			event_id,
			message,
			read,
			created,
			COUNT(*) OVER() AS total_count
		FROM
			notification
		WHERE
			user_id = $1
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
			Notification {
				message: row.try_get::<String, _>("message")?,
				event_id: row.try_get::<Option<Uuid>, _>("event_id")?,
				read: row.try_get::<bool, _>("read")?,
				created: row.try_get::<OffsetDateTime, _>("created")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListNotificationsResponse { notifications })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
