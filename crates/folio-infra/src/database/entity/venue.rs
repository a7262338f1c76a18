use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use folio_core::domain::VenueKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub issn: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Venue {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind.parse().unwrap_or(VenueKind::Other),
            issn: model.issn,
        }
    }
}

impl From<folio_core::domain::Venue> for ActiveModel {
    fn from(v: folio_core::domain::Venue) -> Self {
        Self {
            id: if v.id == 0 { NotSet } else { Unchanged(v.id) },
            name: Set(v.name),
            kind: Set(v.kind.as_str().to_string()),
            issn: Set(v.issn),
        }
    }
}
