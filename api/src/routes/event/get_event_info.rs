use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};
use time::OffsetDateTime;

use crate::prelude::*;

pub async fn get_event_info(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: GetEventInfoPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: GetEventInfoRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, GetEventInfoRequest>,
) -> Result<AppResponse<GetEventInfoRequest>, ErrorType> {
	info!("Getting info for event `{}`", event_id);

	let row = query(
		r#"
		SELECT
			owner_id,
			name,
			description,
			venue,
			starts,
			ends,
			status,
			created,
			(
				SELECT
					COUNT(*)
				FROM
					event_attendee
				WHERE
					event_attendee.event_id = event.id
			) AS attendee_count
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

	let status = row.try_get::<EventStatus, _>("status")?;

	if status != EventStatus::Published {
		// Drafts and cancelled events are only visible to the people running
		// them. Everyone else is told the event does not exist.
		let access = db::get_event_access(
			&mut **database,
			&event_id,
			&user_data.id,
		)
		.await?;

		if access.is_none() {
			debug!(
				"User `{}` cannot see unpublished event `{}`",
				user_data.id, event_id
			);
			return Err(ErrorType::ResourceDoesNotExist);
		}
	}

	AppResponse::builder()
		.body(GetEventInfoResponse {
			event: WithId::new(
				event_id,
				Event {
					owner_id: row.try_get::<Uuid, _>("owner_id")?,
					name: row.try_get::<String, _>("name")?,
					description: row.try_get::<String, _>("description")?,
					venue: row.try_get::<String, _>("venue")?,
					starts: row.try_get::<OffsetDateTime, _>("starts")?,
					ends: row.try_get::<OffsetDateTime, _>("ends")?,
					status,
					created: row.try_get::<OffsetDateTime, _>("created")?,
				},
			),
			attendee_count: row.try_get::<i64, _>("attendee_count")? as _,
		})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
