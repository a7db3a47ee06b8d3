use std::cmp::Ordering;

use semver::Version;
use sqlx::{pool::PoolOptions, Pool};

use crate::prelude::*;

/// The budget of an event, stored as individual budget items.
mod budget;
/// The events themselves, along with their attendees.
mod event;
/// The organizer message board of an event.
mod message;
/// The meta data of the database. This is mostly used for the version
/// number of the database and handling the migrations for the database.
mod meta_data;
/// The notifications delivered to users.
mod notification;
/// The roles and permission grants on an event, and the authorization
/// check that decides what a user can do on an event.
mod rbac;
/// The bookable resources of an event and their bookings.
mod resource;
/// The tasks on the todo list of an event.
mod task;
/// The users of the application and their logins.
mod user;

pub use self::{
	budget::*,
	event::*,
	message::*,
	meta_data::*,
	notification::*,
	rbac::*,
	resource::*,
	task::*,
	user::*,
};

/// Connects to the database based on a config. Not much to say here.
#[instrument(skip(config))]
pub async fn connect(config: &DatabaseConfig) -> Pool<DatabaseType> {
	info!("Connecting to database `{}` on {}", config.database, config.host);
	PoolOptions::<DatabaseType>::new()
		.max_connections(config.connection_limit)
		.connect_with(
			<DatabaseConnection as sqlx::Connection>::Options::new()
				.host(&config.host)
				.port(config.port)
				.username(&config.user)
				.password(&config.password)
				.database(&config.database),
		)
		.await
		.expect("Failed to connect to database")
}

/// Initializes the database. If the database is empty, all tables, indices
/// and constraints are created fresh, in that order, and the current
/// version is stamped on it. Otherwise, the stamped version is compared to
/// the current one and migrations run if needed.
#[instrument(skip(state))]
pub async fn initialize(state: &AppState) -> Result<(), sqlx::Error> {
	info!("Initializing database");

	let tables = query(
		r#"
		SELECT
			table_name
		FROM
			information_schema.tables
		WHERE
			table_schema = 'public' AND
			table_type = 'BASE TABLE';
		"#,
	)
	.fetch_all(&state.database)
	.await?;

	if tables.is_empty() {
		warn!("No tables exist. Creating fresh");

		let mut transaction = state.database.begin().await?;

		initialize_meta_tables(&mut transaction).await?;
		initialize_user_tables(&mut transaction).await?;
		initialize_event_tables(&mut transaction).await?;
		initialize_rbac_tables(&mut transaction).await?;
		initialize_budget_tables(&mut transaction).await?;
		initialize_resource_tables(&mut transaction).await?;
		initialize_task_tables(&mut transaction).await?;
		initialize_message_tables(&mut transaction).await?;
		initialize_notification_tables(&mut transaction).await?;

		initialize_meta_indices(&mut transaction).await?;
		initialize_user_indices(&mut transaction).await?;
		initialize_event_indices(&mut transaction).await?;
		initialize_rbac_indices(&mut transaction).await?;
		initialize_budget_indices(&mut transaction).await?;
		initialize_resource_indices(&mut transaction).await?;
		initialize_task_indices(&mut transaction).await?;
		initialize_message_indices(&mut transaction).await?;
		initialize_notification_indices(&mut transaction).await?;

		initialize_meta_constraints(&mut transaction).await?;
		initialize_user_constraints(&mut transaction).await?;
		initialize_event_constraints(&mut transaction).await?;
		initialize_rbac_constraints(&mut transaction).await?;
		initialize_budget_constraints(&mut transaction).await?;
		initialize_resource_constraints(&mut transaction).await?;
		initialize_task_constraints(&mut transaction).await?;
		initialize_message_constraints(&mut transaction).await?;
		initialize_notification_constraints(&mut transaction).await?;

		set_database_version(&mut transaction, &constants::DATABASE_VERSION)
			.await?;

		transaction.commit().await?;

		info!("Database created fresh");

		Ok(())
	} else {
		let mut connection = state.database.acquire().await?;
		let version = get_database_version(&mut connection).await?;

		match version.cmp(&constants::DATABASE_VERSION) {
			Ordering::Greater => {
				error!(
					"Database version is higher than what's recognised. \
					Exiting..."
				);
				panic!("Database version too high");
			}
			Ordering::Less => {
				info!(
					"Migrating from {}.{}.{}",
					version.major, version.minor, version.patch
				);

				migrate_database(&mut connection, version).await?;
			}
			Ordering::Equal => {
				info!(
					"Database already in the latest version. No migration \
					required."
				);
			}
		}

		Ok(())
	}
}

/// Runs every migration between the version stamped on the database and the
/// current one, in order, and stamps the new version.
async fn migrate_database(
	connection: &mut DatabaseConnection,
	from_version: Version,
) -> Result<(), sqlx::Error> {
	let migrations = ["0.1.0"];

	let mut migrating = false;

	for migration_version in migrations {
		if migration_version == from_version.to_string() {
			migrating = true;
		}
		if !migrating {
			continue;
		}
		match migration_version {
			"0.1.0" => (),
			_ => (),
		}
	}

	set_database_version(connection, &constants::DATABASE_VERSION).await?;

	Ok(())
}
