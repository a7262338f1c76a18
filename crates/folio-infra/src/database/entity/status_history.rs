use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use folio_core::domain::PublicationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "status_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub publication_id: i32,
    pub from_status: String,
    pub to_status: String,
    pub changed_by: i32,
    pub note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::StatusChange {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            publication_id: model.publication_id,
            from_status: model
                .from_status
                .parse()
                .unwrap_or(PublicationStatus::Draft),
            to_status: model.to_status.parse().unwrap_or(PublicationStatus::Draft),
            changed_by: model.changed_by,
            note: model.note,
            created_at: model.created_at.into(),
        }
    }
}

impl From<folio_core::domain::StatusChange> for ActiveModel {
    fn from(s: folio_core::domain::StatusChange) -> Self {
        Self {
            id: if s.id == 0 { NotSet } else { Unchanged(s.id) },
            publication_id: Set(s.publication_id),
            from_status: Set(s.from_status.as_str().to_string()),
            to_status: Set(s.to_status.as_str().to_string()),
            changed_by: Set(s.changed_by),
            note: Set(s.note),
            created_at: Set(s.created_at.into()),
        }
    }
}
