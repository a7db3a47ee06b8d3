use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};
use time::OffsetDateTime;

use crate::prelude::*;

/// The handler to list the messages on the organizer board of an event.
/// Reading the board needs no specific permission grant, but it is reserved
/// for the people running the event: the owner and anyone holding a role.
pub async fn list_event_messages(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListEventMessagesPath { event_id },
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListEventMessagesRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, ListEventMessagesRequest>,
) -> Result<AppResponse<ListEventMessagesRequest>, ErrorType> {
	info!("Listing messages of event `{}`", event_id);

	let access = db::get_event_access(
		&mut **database,
		&event_id,
		&user_data.id,
	)
	.await?
	.ok_or(ErrorType::ResourceDoesNotExist)?;

	if !(access.is_organizer() || access.is_admin()) {
		debug!(
			"User `{}` is not on the organizing team of event `{}`",
			user_data.id, event_id
		);
		return Err(ErrorType::Unauthorized);
	}

	let mut total_count = 0;
	let messages = query(
		r#"
		SELECT
			id,
			posted_by,
			body,
			posted,
			COUNT(*) OVER() AS total_count
		FROM
			event_message
		WHERE
			event_id = $1
		ORDER BY
			posted DESC
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
			EventMessage {
				posted_by: row.try_get::<Uuid, _>("posted_by")?,
				body: row.try_get::<String, _>("body")?,
				posted: row.try_get::<OffsetDateTime, _>("posted")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	AppResponse::builder()
		.body(ListEventMessagesResponse { messages })
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
