//! Schema bootstrap
//!
//! Creates the tables (and their foreign key) from the SeaORM entities when
//! they are missing. Existing tables are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};

use crate::entity::{resume_items, resumes};
use crate::error::DomainError;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    create_table(db, &schema, resumes::Entity).await?;
    create_table(db, &schema, resume_items::Entity).await?;

    tracing::info!("Database schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::debug!(table = entity.table_name(), "Ensured table exists");
    Ok(())
}
