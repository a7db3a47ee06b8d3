use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn create_resource(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: CreateResourcePath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					CreateResourceRequestProcessed {
						name,
						kind,
						capacity,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, CreateResourceRequest>,
) -> Result<AppResponse<CreateResourceRequest>, ErrorType> {
	info!("Creating resource `{}` on event `{}`", name, event_id);

	let resource_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			resource(
				id,
				event_id,
				name,
				kind,
				capacity,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, NOW());
		"#,
	)
	.bind(resource_id)
	.bind(event_id)
	.bind(&name)
	.bind(&kind)
	.bind(capacity)
	.execute(&mut **database)
	.await?;

	trace!("Resource `{}` created", resource_id);

	AppResponse::builder()
		.body(CreateResourceResponse {
			id: WithId::from(resource_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
