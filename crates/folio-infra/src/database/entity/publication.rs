//! Publication entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use folio_core::domain::PublicationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    #[sea_orm(column_name = "abstract", column_type = "Text")]
    pub abstract_text: String,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year: Option<i32>,
    pub status: String,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Publication {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            abstract_text: model.abstract_text,
            category_id: model.category_id,
            venue_id: model.venue_id,
            year: model.year,
            // Unknown status strings are treated as drafts.
            status: model.status.parse().unwrap_or(PublicationStatus::Draft),
            version: model.version,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<folio_core::domain::Publication> for ActiveModel {
    fn from(p: folio_core::domain::Publication) -> Self {
        Self {
            id: if p.id == 0 { NotSet } else { Unchanged(p.id) },
            owner_id: Set(p.owner_id),
            title: Set(p.title),
            abstract_text: Set(p.abstract_text),
            category_id: Set(p.category_id),
            venue_id: Set(p.venue_id),
            year: Set(p.year),
            status: Set(p.status.as_str().to_string()),
            version: Set(p.version),
            created_at: Set(p.created_at.into()),
            updated_at: Set(p.updated_at.into()),
        }
    }
}
