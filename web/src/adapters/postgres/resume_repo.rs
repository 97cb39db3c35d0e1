//! PostgreSQL adapter for ResumeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{NewResume, Resume, ResumeId, UserId};
use crate::domain::ports::ResumeRepository;
use crate::entity::resumes;
use crate::error::DomainError;

/// PostgreSQL implementation of ResumeRepository
pub struct PostgresResumeRepository {
    db: DatabaseConnection,
}

impl PostgresResumeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeRepository for PostgresResumeRepository {
    async fn find_by_id(&self, id: &ResumeId) -> Result<Option<Resume>, DomainError> {
        let result = resumes::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Resume>, DomainError> {
        let results = resumes::Entity::find()
            .filter(resumes::Column::UserId.eq(owner.as_str()))
            .order_by_asc(resumes::Column::Title)
            .order_by_asc(resumes::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, resume: &NewResume) -> Result<Resume, DomainError> {
        let model = resumes::ActiveModel {
            user_id: Set(resume.owner.0.clone()),
            title: Set(resume.title.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn update_title(&self, id: &ResumeId, title: &str) -> Result<Resume, DomainError> {
        let result = resumes::ActiveModel {
            id: Set(id.0),
            title: Set(title.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Resume {} not found", id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<resumes::Model> for Resume {
    fn from(model: resumes::Model) -> Self {
        Resume {
            id: ResumeId(model.id),
            owner: UserId(model.user_id),
            title: model.title,
        }
    }
}
