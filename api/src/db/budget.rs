use crate::prelude::*;

/// Initializes the budget tables
#[instrument(skip(connection))]
pub async fn initialize_budget_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up budget tables");
	query(
		r#"
		CREATE TABLE budget_item(
			id UUID CONSTRAINT budget_item_pk PRIMARY KEY,
			event_id UUID NOT NULL CONSTRAINT budget_item_fk_event_id
				REFERENCES event(id),
			description TEXT NOT NULL,
			category TEXT NOT NULL,
			estimated_cents BIGINT NOT NULL CONSTRAINT
				budget_item_chk_estimated_cents_positive CHECK(
					estimated_cents >= 0
				),
			actual_cents BIGINT CONSTRAINT
				budget_item_chk_actual_cents_positive CHECK(
					actual_cents IS NULL OR actual_cents >= 0
				),
			created TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the budget table indices
#[instrument(skip(connection))]
pub async fn initialize_budget_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up budget tables indices");
	query(
		r#"
		CREATE INDEX
			budget_item_idx_event_id
		ON
			budget_item(event_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the budget tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_budget_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up budget tables constraints");
	Ok(())
}
