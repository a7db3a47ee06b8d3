use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn add_budget_item(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: AddBudgetItemPath { event_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					AddBudgetItemRequestProcessed {
						description,
						category,
						estimated_cents,
						actual_cents,
					},
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, AddBudgetItemRequest>,
) -> Result<AppResponse<AddBudgetItemRequest>, ErrorType> {
	info!("Adding budget item to event `{}`", event_id);

	let item_id = Uuid::now_v1();

	query(
		r#"
		INSERT INTO
			budget_item(
				id,
				event_id,
				description,
				category,
				estimated_cents,
				actual_cents,
				created
			)
		VALUES
			($1, $2, $3, $4, $5, $6, NOW());
		"#,
	)
	.bind(item_id)
	.bind(event_id)
	.bind(&description)
	.bind(&category)
	.bind(estimated_cents)
	.bind(actual_cents)
	.execute(&mut **database)
	.await?;

	trace!("Budget item `{}` created", item_id);

	AppResponse::builder()
		.body(AddBudgetItemResponse {
			id: WithId::from(item_id),
		})
		.headers(())
		.status_code(StatusCode::CREATED)
		.build()
		.into_result()
}
