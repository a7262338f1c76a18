use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub publication_id: Option<i32>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Notification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            publication_id: model.publication_id,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at.into(),
        }
    }
}

impl From<folio_core::domain::Notification> for ActiveModel {
    fn from(n: folio_core::domain::Notification) -> Self {
        Self {
            id: if n.id == 0 { NotSet } else { Unchanged(n.id) },
            user_id: Set(n.user_id),
            publication_id: Set(n.publication_id),
            message: Set(n.message),
            is_read: Set(n.is_read),
            created_at: Set(n.created_at.into()),
        }
    }
}
