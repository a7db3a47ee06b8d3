use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to update a task on an event. Only the provided fields are
/// changed. Tasks move freely between statuses, so finished work can be
/// reopened. When the task changes hands, the new assignee is notified.
pub async fn update_task(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: UpdateTaskPath { event_id, task_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					UpdateTaskRequestProcessed {
						title,
						description,
						assigned_to,
						due,
						status,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, UpdateTaskRequest>,
) -> Result<AppResponse<UpdateTaskRequest>, ErrorType> {
	info!("Updating task `{}` on event `{}`", task_id, event_id);

	let row = query(
		r#"
		SELECT
			title,
			assigned_to
		FROM
			task
		WHERE
			id = $1 AND
			event_id = $2;
		"#,
	)
	.bind(task_id)
	.bind(event_id)
	.fetch_optional(&mut **database)
	.await?
	.ok_or(ErrorType::ResourceDoesNotExist)?;

	let current_assignee = row.try_get::<Option<Uuid>, _>("assigned_to")?;

	if let Some(assignee) = assigned_to {
		let assignee_exists = query(
			r#"
			SELECT
				id
			FROM
				"user"
			WHERE
				id = $1;
			"#,
		)
		.bind(assignee)
		.fetch_optional(&mut **database)
		.await?
		.is_some();

		if !assignee_exists {
			return Err(ErrorType::UserNotFound);
		}

		let on_team = query(
			r#"
			SELECT
				id
			FROM
				event
			WHERE
				id = $1 AND
				(
					owner_id = $2 OR
					EXISTS(
						SELECT
							1
						FROM
							event_role
						WHERE
							event_id = $1 AND
							user_id = $2
					)
				);
			"#,
		)
		.bind(event_id)
		.bind(assignee)
		.fetch_optional(&mut **database)
		.await?
		.is_some();

		if !on_team {
			debug!(
				"User `{}` is not on the organizing team of event `{}`",
				assignee, event_id
			);
			return Err(ErrorType::WrongParameters);
		}
	}

	query(
		r#"
		UPDATE
			task
		SET
			title = COALESCE($1, title),
			description = COALESCE($2, description),
			assigned_to = COALESCE($3, assigned_to),
			due = COALESCE($4, due),
			status = COALESCE($5, status)
		WHERE
			id = $6 AND
			event_id = $7;
		"#,
	)
	.bind(&title)
	.bind(&description)
	.bind(assigned_to)
	.bind(due)
	.bind(status)
	.bind(task_id)
	.bind(event_id)
	.execute(&mut **database)
	.await?;

	trace!("Task `{}` updated", task_id);

	let task_title = title.unwrap_or(row.try_get::<String, _>("title")?);
	if let Some(assignee) = assigned_to {
		if Some(assignee) != current_assignee && assignee != user_data.id {
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

			db::add_notification(
				&mut **database,
				&assignee,
				Some(&event_id),
				&format!(
					"You were assigned a task on {}: {}",
					event_name, task_title
				),
			)
			.await?;

			trace!("New assignee notified");
		}
	}

	AppResponse::builder()
		.body(UpdateTaskResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
