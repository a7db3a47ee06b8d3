use axum::http::StatusCode;
use models::api::{
	event::*,
	AuthenticatedRequestHeaders,
	TotalCountResponseHeaders,
};

use crate::prelude::*;

pub async fn list_budget_items(
	AuthenticatedAppRequest {
		request:
			ProcessedApiRequest {
				path: ListBudgetItemsPath { event_id },
				query: Paginated {
					data: (),
					count,
					page,
				},
				headers: AuthenticatedRequestHeaders { authorization: _ },
				body: ListBudgetItemsRequest,
			},
		database,
		client_ip: _,
		config: _,
		user_data: _,
	}: AuthenticatedAppRequest<'_, ListBudgetItemsRequest>,
) -> Result<AppResponse<ListBudgetItemsRequest>, ErrorType> {
	info!("Listing budget items of event `{}`", event_id);

	let mut total_count = 0;
	let items = query(
		r#"
		SELECT
			id,
			description,
			category,
			estimated_cents,
			actual_cents,
			COUNT(*) OVER() AS total_count
		FROM
			budget_item
		WHERE
			event_id = $1
		ORDER BY
			created ASC
		LIMIT $2
		OFFSET $3;
		"#,
	)
	.bind(event_id)
	.bind(count as i32)
	.bind((count * page) as i32)
	.fetch_all(&mut **database)
	.await?
	.into_iter()
	.map(|row| {
		total_count = row.try_get::<i64, _>("total_count")?;
		Ok(WithId::new(
			row.try_get::<Uuid, _>("id")?,
			BudgetItem {
				description: row.try_get::<String, _>("description")?,
				category: row.try_get::<String, _>("category")?,
				estimated_cents: row.try_get::<i64, _>("estimated_cents")?,
				actual_cents: row.try_get::<Option<i64>, _>("actual_cents")?,
			},
		))
	})
	.collect::<Result<_, ErrorType>>()?;

	// The totals cover the whole event, not just the requested page
	let totals = query(
		r#"
		SELECT
			COALESCE(SUM(estimated_cents), 0) AS total_estimated_cents,
			COALESCE(SUM(actual_cents), 0) AS total_actual_cents
		FROM
			budget_item
		WHERE
			event_id = $1;
		"#,
	)
	.bind(event_id)
	.fetch_one(&mut **database)
	.await?;

	AppResponse::builder()
		.body(ListBudgetItemsResponse {
			items,
			total_estimated_cents: totals
				.try_get::<i64, _>("total_estimated_cents")?,
			total_actual_cents: totals.try_get::<i64, _>("total_actual_cents")?,
		})
		.headers(TotalCountResponseHeaders {
			total_count: TotalCountHeader(total_count as _),
		})
		.status_code(StatusCode::OK)
		.build()
		.into_result()
}
