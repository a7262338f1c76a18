//! Edit-log entity: one row per changed field per save.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "edit_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub publication_id: i32,
    pub version: i32,
    pub field: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub old_value: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub new_value: Option<String>,
    pub edited_by: i32,
    pub edited_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::EditRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            publication_id: model.publication_id,
            version: model.version,
            field: model.field,
            old_value: model.old_value,
            new_value: model.new_value,
            edited_by: model.edited_by,
            edited_at: model.edited_at.into(),
        }
    }
}

impl From<folio_core::domain::EditRecord> for ActiveModel {
    fn from(e: folio_core::domain::EditRecord) -> Self {
        Self {
            id: if e.id == 0 { NotSet } else { Unchanged(e.id) },
            publication_id: Set(e.publication_id),
            version: Set(e.version),
            field: Set(e.field),
            old_value: Set(e.old_value),
            new_value: Set(e.new_value),
            edited_by: Set(e.edited_by),
            edited_at: Set(e.edited_at.into()),
        }
    }
}
