use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use folio_core::domain::ReviewDecision;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review_actions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub publication_id: i32,
    pub reviewer_id: i32,
    pub decision: String,
    pub note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::ReviewAction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            publication_id: model.publication_id,
            reviewer_id: model.reviewer_id,
            decision: model
                .decision
                .parse()
                .unwrap_or(ReviewDecision::RequestChanges),
            note: model.note,
            created_at: model.created_at.into(),
        }
    }
}

impl From<folio_core::domain::ReviewAction> for ActiveModel {
    fn from(r: folio_core::domain::ReviewAction) -> Self {
        Self {
            id: if r.id == 0 { NotSet } else { Unchanged(r.id) },
            publication_id: Set(r.publication_id),
            reviewer_id: Set(r.reviewer_id),
            decision: Set(r.decision.as_str().to_string()),
            note: Set(r.note),
            created_at: Set(r.created_at.into()),
        }
    }
}
