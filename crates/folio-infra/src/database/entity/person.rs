use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Person {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            affiliation: model.affiliation,
        }
    }
}

impl From<folio_core::domain::Person> for ActiveModel {
    fn from(p: folio_core::domain::Person) -> Self {
        Self {
            id: if p.id == 0 { NotSet } else { Unchanged(p.id) },
            full_name: Set(p.full_name),
            email: Set(p.email),
            affiliation: Set(p.affiliation),
        }
    }
}
