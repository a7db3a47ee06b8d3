use axum::http::StatusCode;
use models::api::{notification::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to mark a notification as read. Notifications belong to the
/// user they were delivered to, so anyone else's notification looks like it
/// does not exist. Marking an already read notification changes nothing.
pub async fn mark_notification_read(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: MarkNotificationReadPath { notification_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: MarkNotificationReadRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, MarkNotificationReadRequest>,
) -> Result<AppResponse<MarkNotificationReadRequest>, ErrorType> {
	info!("Marking notification `{}` as read", notification_id);

	let rows_affected = query(
		r#"
		UPDATE
			notification
		SET
			read = TRUE
		WHERE
			id = $1 AND
			user_id = $2;
		"#,
	)
	.bind(notification_id)
	.bind(user_data.id)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	AppResponse::builder()
		.body(MarkNotificationReadResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
