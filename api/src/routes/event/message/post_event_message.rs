use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to post a message on the organizer board of an event. Everyone
/// else on the organizing team, including the owner, gets a notification
/// about the new message.
pub async fn post_event_message(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: PostEventMessagePath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: PostEventMessageRequestProcessed { body },
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, PostEventMessageRequest>,
) -> Result<AppResponse<PostEventMessageRequest>, ErrorType> {
	info!("Posting a message on event `{}`", event_id);

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

	let message_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			event_message(
				id,
				event_id,
				posted_by,
				body,
				posted
			)
		VALUES
			($1, $2, $3, $4, NOW());
		"#,
	)
	.bind(message_id)
	.bind(event_id)
	.bind(user_data.id)
	.bind(&body)
	.execute(&mut **database)
	.await?;

	trace!("Message `{}` posted", message_id);

	let recipients = query(
		r#"
		SELECT
			user_id
		FROM
			event_role
		WHERE
			event_id = $1 AND
			user_id != $2
		UNION
		SELECT
			owner_id
		FROM
			event
		WHERE
			id = $1 AND
			owner_id != $2;
		"#,
	)
	.bind(event_id)
	.bind(user_data.id)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| row.try_get::<Uuid, _>("user_id"))
	.collect::<Result<Vec<_>, _>>()?;

	for recipient in recipients {
		db::add_notification(
			&mut **database,
			&recipient,
			Some(&event_id),
			&format!(
				"{} posted on the organizer board of {}",
				user_data.username, event_name
			),
		)
		.await?;
	}

	trace!("Organizing team notified");

	AppResponse::builder()
		.body(PostEventMessageResponse {
			id: WithId::from(message_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
