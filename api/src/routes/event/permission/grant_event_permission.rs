use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to grant a permission on an event. Grants are idempotent:
/// granting the same permission again, or granting it with a different
/// `allowed` flag, overwrites the one existing row. The subject user gets a
/// notification either way.
pub async fn grant_event_permission(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: GrantEventPermissionPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					GrantEventPermissionRequestProcessed {
						user_id,
						permission,
						allowed,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, GrantEventPermissionRequest>,
) -> Result<AppResponse<GrantEventPermissionRequest>, ErrorType> {
	info!(
		"Granting `{}` on event `{}` to user `{}`",
		permission, event_id, user_id
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

	query(
		r#"
		INSERT INTO
			event_permission(
				event_id,
				user_id,
				permission,
				is_allowed,
				granted_by,
				granted
			)
		VALUES
			($1, $2, $3, $4, $5, NOW())
		ON CONFLICT
			(event_id, user_id, permission)
		DO UPDATE SET
			is_allowed = EXCLUDED.is_allowed,
			granted_by = EXCLUDED.granted_by,
			granted = EXCLUDED.granted;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.bind(permission)
	.bind(allowed)
	.bind(user_data.id)
	.execute(&mut **database)
	.await?;

	trace!("Permission grant upserted");

	let message = if allowed {
		format!("You were granted `{}` on {}", permission, event_name)
	} else {
		format!("You were denied `{}` on {}", permission, event_name)
	};
	db::add_notification(&mut **database, &user_id, Some(&event_id), &message)
		.await?;

	trace!("Subject user notified");

	AppResponse::builder()
		.body(GrantEventPermissionResponse {})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
