use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn update_event(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: UpdateEventPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					UpdateEventRequestProcessed {
						name,
						description,
						venue,
						starts,
						ends,
						status,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, UpdateEventRequest>,
) -> Result<AppResponse<UpdateEventRequest>, ErrorType> {
	info!("Updating event `{}`", event_id);

	let row = query(
		r#"
		SELECT
			starts,
			ends,
			status
		FROM
			event
		WHERE
			id = $1;
		"#,
	)
	.bind(event_id)
	.fetch_optional(&mut **database)
	.await?
	.ok_or(ErrorType::ResourceDoesNotExist)?;

	let current_status = row.try_get::<EventStatus, _>("status")?;

	// Cancelling is final. Nothing about a cancelled event can change
	if current_status == EventStatus::Cancelled {
		debug!("Event `{}` is cancelled and cannot be updated", event_id);
		return Err(ErrorType::InvalidStatusTransition);
	}

	let new_starts = starts.unwrap_or(row.try_get::<OffsetDateTime, _>("starts")?);
	let new_ends = ends.unwrap_or(row.try_get::<OffsetDateTime, _>("ends")?);

	if new_starts >= new_ends {
		debug!("Event `{}` would end before it starts", event_id);
		return Err(ErrorType::WrongParameters);
	}

	query(
		r#"
		UPDATE
			event
		SET
			name = COALESCE($1, name),
			description = COALESCE($2, description),
			venue = COALESCE($3, venue),
			starts = $4,
			ends = $5,
			status = COALESCE($6, status)
		WHERE
			id = $7;
		"#,
	)
	.bind(&name)
	.bind(&description)
	.bind(&venue)
	.bind(new_starts)
	.bind(new_ends)
	.bind(status)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Event `{}` updated", event_id);

	AppResponse::builder()
		.body(UpdateEventResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
