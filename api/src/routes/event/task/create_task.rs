use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

/// The handler to put a task on the todo list of an event. New tasks start
/// out in the todo status. A task can only be assigned to the owner or to a
/// member of the organizing team, and the assignee is notified.
pub async fn create_task(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: CreateTaskPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					CreateTaskRequestProcessed {
						title,
						description,
						assigned_to,
						due,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, CreateTaskRequest>,
) -> Result<AppResponse<CreateTaskRequest>, ErrorType> {
	info!("Creating task `{}` on event `{}`", title, event_id);

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

	let task_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			task(
				id,
				event_id,
				title,
				description,
				assigned_to,
				due,
				status,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, $6, $7, NOW());
		"#,
	)
	.bind(task_id)
	.bind(event_id)
	.bind(&title)
	.bind(&description)
	.bind(assigned_to)
	.bind(due)
	.bind(TaskStatus::Todo)
	.execute(&mut **database)
	.await?;

	trace!("Task `{}` created", task_id);

	if let Some(assignee) = assigned_to {
		if assignee != user_data.id {
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
				&format!("You were assigned a task on {}: {}", event_name, title),
			)
			.await?;

			trace!("Assignee notified");
		}
	}

	AppResponse::builder()
		.body(CreateTaskResponse {
			id: WithId::from(task_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
