use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn update_budget_item(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: UpdateBudgetItemPath { event_id, item_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body:
					UpdateBudgetItemRequestProcessed {
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
	}: AuthenticatedAppRequest<'_, UpdateBudgetItemRequest>,
) -> Result<AppResponse<UpdateBudgetItemRequest>, ErrorType> {
	info!(
		"Updating budget item `{}` of event `{}`",
		item_id, event_id
	);

	let rows_affected = query(
		r#"
		UPDATE
			budget_item
		SET
			description = COALESCE($1, description),
			category = COALESCE($2, category),
			estimated_cents = COALESCE($3, estimated_cents),
			actual_cents = COALESCE($4, actual_cents)
		WHERE
			id = $5 AND
			event_id = $6;
		"#,
	)
	.bind(&description)
	.bind(&category)
	.bind(estimated_cents)
	.bind(actual_cents)
	.bind(item_id)
	.bind(event_id)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	trace!("Budget item `{}` updated", item_id);

	AppResponse::builder()
		.body(UpdateBudgetItemResponse {})
		.headers(())
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
