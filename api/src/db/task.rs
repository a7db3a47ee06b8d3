use crate::prelude::*;

/// Initializes the task tables
#[instrument(skip(connection))]
pub async fn initialize_task_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up task tables");
	query(
		r#"
		CREATE TABLE task(
			id UUID CONSTRAINT task_pk PRIMARY KEY,
			event_id UUID NOT NULL CONSTRAINT task_fk_event_id
				REFERENCES event(id),
			title TEXT NOT NULL,
			description TEXT,
			assigned_to UUID CONSTRAINT task_fk_assigned_to
				REFERENCES "user"(id),
			due TIMESTAMPTZ,
			status TEXT NOT NULL CONSTRAINT task_chk_status CHECK(
				status IN ('todo', 'inProgress', 'done')
			),
			created TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the task table indices
#[instrument(skip(connection))]
pub async fn initialize_task_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up task tables indices");
	query(
		r#"
		CREATE INDEX
			task_idx_event_id
		ON
			task(event_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the task tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_task_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up task tables constraints");
	Ok(())
}
