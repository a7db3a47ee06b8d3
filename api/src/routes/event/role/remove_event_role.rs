use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to take a role away from a user on an event. Removing a role
/// the user does not hold changes nothing. Permission grants are left in
/// place, although without any role the user stops being part of the team.
pub async fn remove_event_role(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path:
					RemoveEventRolePath {
						event_id,
						user_id,
						role,
					},
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: RemoveEventRoleRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, RemoveEventRoleRequest>,
) -> Result<AppResponse<RemoveEventRoleRequest>, ErrorType> {
	info!(
		"Removing `{}` from user `{}` on event `{}`",
		role, user_id, event_id
	);

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
		DELETE FROM
			event_role
		WHERE
			event_id = $1 AND
			user_id = $2 AND
			role = $3;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.bind(role)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		debug!("User `{}` did not hold `{}`", user_id, role);
	} else {
		db::add_notification(
			&mut **database,
			&user_id,
			Some(&event_id),
			&format!("Your {} role on {} was removed", role, event_name),
		)
		.await?;

		trace!("Former team member notified");
	}

	AppResponse::builder()
		.body(RemoveEventRoleResponse {})
		.headers(())
		.status_code(StatusCode::RESET_CONTENT)
		.build()
		.into_result()
}
