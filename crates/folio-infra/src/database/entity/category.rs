use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<folio_core::domain::Category> for ActiveModel {
    fn from(c: folio_core::domain::Category) -> Self {
        Self {
            id: if c.id == 0 { NotSet } else { Unchanged(c.id) },
            name: Set(c.name),
            description: Set(c.description),
        }
    }
}
