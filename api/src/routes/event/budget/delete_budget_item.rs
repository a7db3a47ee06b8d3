use axum::http::StatusCode;
use models::api::{event::*, AuthenticatedRequestHeaders};

use crate::prelude::*;

pub async fn delete_budget_item(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: DeleteBudgetItemPath { event_id, item_id },
				query: (),
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: DeleteBudgetItemRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, DeleteBudgetItemRequest>,
) -> Result<AppResponse<DeleteBudgetItemRequest>, ErrorType> {
	info!(
		"Deleting budget item `{}` of event `{}`",
		item_id, event_id
	);

	let rows_affected = query(
		r#"
		DELETE FROM
			budget_item
		WHERE
			id = $1 AND
			event_id = $2;
		"#,
	)
	.bind(item_id)
	.bind(event_id)
	.execute(&mut **database)
	.await?
	.rows_affected();

	if rows_affected == 0 {
		return Err(ErrorType::ResourceDoesNotExist);
	}

	AppResponse::builder()
		.body(DeleteBudgetItemResponse {})
		.headers(())
		.status_code(StatusCode::RESET_CONTENT)
		.build()
		.into_result()
}
