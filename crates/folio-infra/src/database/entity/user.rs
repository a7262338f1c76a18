//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use folio_core::domain::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            full_name: model.full_name,
            // Unknown role strings demote to the least-privileged portal.
            role: model.role.parse().unwrap_or(Role::Professor),
            avatar_url: model.avatar_url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<folio_core::domain::User> for ActiveModel {
    fn from(user: folio_core::domain::User) -> Self {
        Self {
            id: if user.id == 0 {
                NotSet
            } else {
                Unchanged(user.id)
            },
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            role: Set(user.role.as_str().to_string()),
            avatar_url: Set(user.avatar_url),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
