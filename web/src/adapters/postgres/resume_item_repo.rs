//! PostgreSQL adapter for ResumeItemRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{
    NewResumeItem, ResumeId, ResumeItem, ResumeItemFields, ResumeItemId,
};
use crate::domain::ports::ResumeItemRepository;
use crate::entity::resume_items;
use crate::error::DomainError;

/// PostgreSQL implementation of ResumeItemRepository
pub struct PostgresResumeItemRepository {
    db: DatabaseConnection,
}

impl PostgresResumeItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeItemRepository for PostgresResumeItemRepository {
    async fn find_by_resume(&self, resume_id: &ResumeId) -> Result<Vec<ResumeItem>, DomainError> {
        let results = resume_items::Entity::find()
            .filter(resume_items::Column::ResumeId.eq(resume_id.0))
            .order_by_desc(resume_items::Column::StartDate)
            .order_by_asc(resume_items::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_in_resume(
        &self,
        resume_id: &ResumeId,
        id: &ResumeItemId,
    ) -> Result<Option<ResumeItem>, DomainError> {
        let result = resume_items::Entity::find()
            .filter(resume_items::Column::ResumeId.eq(resume_id.0))
            .filter(resume_items::Column::Id.eq(id.0))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn count_by_resumes(
        &self,
        resume_ids: &[ResumeId],
    ) -> Result<HashMap<ResumeId, u64>, DomainError> {
        if resume_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = resume_items::Entity::find()
            .select_only()
            .column(resume_items::Column::ResumeId)
            .column_as(resume_items::Column::Id.count(), "num_items")
            .filter(resume_items::Column::ResumeId.is_in(resume_ids.iter().map(|id| id.0)))
            .group_by(resume_items::Column::ResumeId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(resume_id, count)| (ResumeId(resume_id), count.max(0) as u64))
            .collect())
    }

    async fn create(&self, item: &NewResumeItem) -> Result<ResumeItem, DomainError> {
        let fields = &item.fields;
        let model = resume_items::ActiveModel {
            resume_id: Set(item.resume_id.0),
            title: Set(fields.title.clone()),
            company: Set(fields.company.clone()),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            description: Set(fields.description.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &ResumeItemId,
        fields: &ResumeItemFields,
    ) -> Result<ResumeItem, DomainError> {
        let result = resume_items::ActiveModel {
            id: Set(id.0),
            title: Set(fields.title.clone()),
            company: Set(fields.company.clone()),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            description: Set(fields.description.clone()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Resume item {} not found", id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &ResumeItemId) -> Result<(), DomainError> {
        let result = resume_items::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Resume item {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<resume_items::Model> for ResumeItem {
    fn from(model: resume_items::Model) -> Self {
        ResumeItem {
            id: ResumeItemId(model.id),
            resume_id: ResumeId(model.resume_id),
            title: model.title,
            company: model.company,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
        }
    }
}
