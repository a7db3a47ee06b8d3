use crate::prelude::*;

/// Initializes the user tables
#[instrument(skip(connection))]
pub async fn initialize_user_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up user tables");
	query(
		r#"
		CREATE TABLE "user"(
			id UUID CONSTRAINT user_pk PRIMARY KEY,
			username TEXT NOT NULL,
			password TEXT NOT NULL,
			first_name TEXT NOT NULL,
			last_name TEXT NOT NULL,
			email TEXT NOT NULL,
			created TIMESTAMPTZ NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE TABLE user_login(
			login_id UUID CONSTRAINT user_login_pk PRIMARY KEY,
			user_id UUID NOT NULL CONSTRAINT user_login_fk_user_id
				REFERENCES "user"(id),
			refresh_token TEXT NOT NULL,
			token_expiry TIMESTAMPTZ NOT NULL,
			created TIMESTAMPTZ NOT NULL,
			created_ip INET NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the user table indices
#[instrument(skip(connection))]
pub async fn initialize_user_indices(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up user tables indices");
	query(
		r#"
		CREATE UNIQUE INDEX
			user_uq_username
		ON
			"user"(username);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE UNIQUE INDEX
			user_uq_email
		ON
			"user"(email);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	query(
		r#"
		CREATE INDEX
			user_login_idx_user_id
		ON
			user_login(user_id);
		"#,
	)
	.execute(&mut *connection)
	.await?;

	Ok(())
}

/// Initializes the user tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_user_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up user tables constraints");
	Ok(())
}
