use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "login_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub success: bool,
    pub ip: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::LoginLog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            username: model.username,
            success: model.success,
            ip: model.ip,
            created_at: model.created_at.into(),
        }
    }
}

impl From<folio_core::domain::LoginLog> for ActiveModel {
    fn from(l: folio_core::domain::LoginLog) -> Self {
        Self {
            id: if l.id == 0 { NotSet } else { Unchanged(l.id) },
            user_id: Set(l.user_id),
            username: Set(l.username),
            success: Set(l.success),
            ip: Set(l.ip),
            created_at: Set(l.created_at.into()),
        }
    }
}
