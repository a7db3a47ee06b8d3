use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to add a user to the organizing team of an event. Adding a
/// role the user already holds changes nothing. A role only makes the user
/// part of the team; what they can do is still decided by their permission
/// grants.
pub async fn add_event_role(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: AddEventRolePath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: AddEventRoleRequestProcessed { user_id, role },
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, AddEventRoleRequest>,
) -> Result<AppResponse<AddEventRoleRequest>, ErrorType> {
	info!(
		"Adding user `{}` to event `{}` as `{}`",
		user_id, event_id, role
	);

	let subject_exists = query(
		r#"
		SELECT
			id
		FROM
			"user"
		WHERE
			id = $1;
		"#,
	)
	.bind(user_id)
	.fetch_optional(&mut **database)
	.await?
	.is_some();

	if !subject_exists {
		return Err(ErrorType::UserNotFound);
	}

	let event_name = query(
		r#"
		SELECT
			name
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
	.try_get::<String, _>("name")?;

	let rows_affected = query(
		r#"
		INSERT INTO
			event_role(
				event_id,
				user_id,
				role
			)
		VALUES
			($1, $2, $3)
		ON CONFLICT
			(event_id, user_id, role)
		DO NOTHING;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.bind(role)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		debug!("User `{}` already holds `{}`", user_id, role);
	} else {
		db::add_notification(
			&mut **database,
			&user_id,
			Some(&event_id),
			&format!("You were added to {} as {}", event_name, role),
		)
		.await?;

		trace!("New team member notified");
	}

	AppResponse::builder()
		.body(AddEventRoleResponse {})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
