use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn register_for_event(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: RegisterForEventPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: RegisterForEventRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, RegisterForEventRequest>,
) -> Result<AppResponse<RegisterForEventRequest>, ErrorType> {
	info!(
		"Registering user `{}` for event `{}`",
		user_data.id, event_id
	);

	let status = query(
		r#"
		SELECT
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
	.ok_or(ErrorType::ResourceDoesNotExist)?
	.try_get::<EventStatus, _>("status")?;

	if status != EventStatus::Published {
		debug!("Event `{}` is not open for registration", event_id);
		return Err(ErrorType::EventNotPublished);
	}

	query(
		r#"
		INSERT INTO
			event_attendee(
				event_id,
				user_id,
				registered
			)
		VALUES
			($1, $2, NOW());
		"#,
	)
	.bind(event_id)
	.bind(user_data.id)
	.execute(&mut **database)
	.await
	.map_err(|err| match err {
		sqlx::Error::Database(err) if err.is_unique_violation() => {
			ErrorType::AlreadyRegistered
		}
		err => ErrorType::server_error(err),
	})?;

	trace!("Attendee row created");

	AppResponse::builder()
		.body(RegisterForEventResponse {})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
