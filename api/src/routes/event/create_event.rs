use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn create_event(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: CreateEventPath,
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					CreateEventRequestProcessed {
						name,
						description,
						venue,
						starts,
						ends,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data,
	}: AuthenticatedAppRequest<'_, CreateEventRequest>,
) -> Result<AppResponse<CreateEventRequest>, ErrorType> {
	info!("Creating event `{}`", name);

	if starts >= ends {
		debug!("Event would end before it starts");
		return Err(ErrorType::WrongParameters);
	}

	let event_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			event(
				id,
				owner_id,
				name,
				description,
				venue,
				starts,
				ends,
				status,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, $6, $7, $8, NOW());
		"#,
	)
	.bind(event_id)
	.bind(user_data.id)
	.bind(&name)
	.bind(&description)
	.bind(&venue)
	.bind(starts)
	.bind(ends)
	.bind(EventStatus::Draft)
	.execute(&mut **database)
	.await?;

	trace!("Event `{}` created as a draft", event_id);

	AppResponse::builder()
		.body(CreateEventResponse {
			id: WithId::from(event_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
