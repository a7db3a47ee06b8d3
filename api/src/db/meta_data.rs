use semver::Version;

use crate::prelude::*;

/// Initializes the meta tables
#[instrument(skip(connection))]
pub async fn initialize_meta_tables(
	connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up meta tables");
	query(
		r#"
		CREATE TABLE meta_data(
			id TEXT CONSTRAINT meta_data_pk PRIMARY KEY,
			value TEXT NOT NULL
		);
		"#,
	)
	.execute(&mut *connection)
	.await?;
	Ok(())
}

/// Initializes the meta table indices
#[instrument(skip(_connection))]
pub async fn initialize_meta_indices(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up meta tables indices");
	Ok(())
}

/// Initializes the meta tables constraints
#[instrument(skip(_connection))]
pub async fn initialize_meta_constraints(
	_connection: &mut DatabaseConnection,
) -> Result<(), sqlx::Error> {
	info!("Setting up meta tables constraints");
	Ok(())
}

/// Stamps the given version on the database. Any version already stamped is
/// overwritten.
#[instrument(skip(connection))]
pub async fn set_database_version(
	connection: &mut DatabaseConnection,
	version: &Version,
) -> Result<(), sqlx::Error> {
	query(
		r#"
		INSERT INTO
			meta_data(id, value)
		VALUES
			('version_major', $1),
			('version_minor', $2),
			('version_patch', $3)
		ON CONFLICT(id) DO UPDATE SET
			value = EXCLUDED.value;
		"#,
	)
	.bind(version.major.to_string())
	.bind(version.minor.to_string())
	.bind(version.patch.to_string())
	.execute(&mut *connection)
	.await
	.map(|_| ())
}

/// Reads the version stamped on the database.
#[instrument(skip(connection))]
pub async fn get_database_version(
	connection: &mut DatabaseConnection,
) -> Result<Version, sqlx::Error> {
	let rows = query(
		r#"
		SELECT
			id,
			value
		FROM
			meta_data
		WHERE
			id = 'version_major' OR
			id = 'version_minor' OR
			id = 'version_patch';
		"#,
	)
	.fetch_all(&mut *connection)
	.await?;

	let mut version = Version::new(0, 0, 0);

	// If versions can't be parsed, assume it to be the max value, so that
	// migrations would fail
	for row in rows {
		let value = row.try_get::<String, _>("value")?;
		match row.try_get::<String, _>("id")?.as_str() {
			"version_major" => {
				version.major = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			"version_minor" => {
				version.minor = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			"version_patch" => {
				version.patch = value.parse::<u64>().unwrap_or(u64::MAX);
			}
			_ => {}
		}
	}

	Ok(version)
}
