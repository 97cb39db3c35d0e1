use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(255))", indexed)]
    pub user_id: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resume_items::Entity")]
    ResumeItems,
}

impl Related<super::resume_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
