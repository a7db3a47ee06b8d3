use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to revoke a permission grant. Revoking deletes the grant row,
/// which reverts the subject user to the default, which is denied.
pub async fn revoke_event_permission(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path:
					RevokeEventPermissionPath {
						event_id,
						user_id,
						permission,
					},
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: RevokeEventPermissionRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, RevokeEventPermissionRequest>,
) -> Result<AppResponse<RevokeEventPermissionRequest>, ErrorType> {
	info!(
		"Revoking `{}` on event `{}` from user `{}`",
		permission, event_id, user_id
	);

	let rows_affected = query(
		r#"
		DELETE FROM
			event_permission
		WHERE
			event_id = $1 AND
			user_id = $2 AND
			permission = $3;
		"#,
	)
	.bind(event_id)
	.bind(user_id)
	.bind(permission)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	trace!("Permission grant deleted");

	db::add_notification(
		&mut **database,
		&user_id,
		Some(&event_id),
		&format!("Your `{}` permission was revoked", permission),
	)
	.await?;

	trace!("Subject user notified");

	AppResponse::builder()
		.body(RevokeEventPermissionResponse {})
		.headers(())
		.status_code(StatusCode::RESET_CONTENT)
		.build()
		.into_result()
}
