//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DbConn, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};

use folio_core::domain::{
    Category, EditRecord, LoginLog, Notification, Person, Publication, ReviewAction, StatusChange,
    User, Venue,
};
use folio_core::error::RepoError;
use folio_core::ports::{
    CategoryRepository, EditLogRepository, LoginLogRepository, NotificationRepository,
    PageRequest, PageResult, PersonRepository, PublicationFilter, PublicationRepository,
    PublicationSort, ReviewActionRepository, StatusHistoryRepository, UserRepository,
    VenueRepository,
};

use super::entity::{
    category, edit_log, login_log, notification, person, publication, review_action,
    status_history, user, venue,
};
use super::postgres_base::PostgresBaseRepository;

pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;
pub type PostgresPublicationRepository = PostgresBaseRepository<publication::Entity>;
pub type PostgresPersonRepository = PostgresBaseRepository<person::Entity>;
pub type PostgresCategoryRepository = PostgresBaseRepository<category::Entity>;
pub type PostgresVenueRepository = PostgresBaseRepository<venue::Entity>;
pub type PostgresNotificationRepository = PostgresBaseRepository<notification::Entity>;
pub type PostgresLoginLogRepository = PostgresBaseRepository<login_log::Entity>;
pub type PostgresEditLogRepository = PostgresBaseRepository<edit_log::Entity>;
pub type PostgresStatusHistoryRepository = PostgresBaseRepository<status_history::Entity>;
pub type PostgresReviewActionRepository = PostgresBaseRepository<review_action::Entity>;

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Run a select as one page plus the total row count.
async fn fetch_page<E, T>(
    query: Select<E>,
    db: &DbConn,
    page: &PageRequest,
) -> Result<PageResult<T>, RepoError>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    T: From<E::Model>,
{
    let paginator = query.paginate(db, page.per_page);
    let total = paginator.num_items().await.map_err(query_err)?;
    let items = paginator.fetch_page(page.index()).await.map_err(query_err)?;

    Ok(PageResult {
        items: items.into_iter().map(Into::into).collect(),
        total,
        page: page.page,
        per_page: page.per_page,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, RepoError> {
        let result = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(identifier))
                    .add(user::Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, page: &PageRequest) -> Result<PageResult<User>, RepoError> {
        fetch_page(
            user::Entity::find().order_by_asc(user::Column::Id),
            &self.db,
            page,
        )
        .await
    }
}

#[async_trait]
impl PublicationRepository for PostgresPublicationRepository {
    async fn search(
        &self,
        filter: &PublicationFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Publication>, RepoError> {
        let mut cond = Condition::all();

        if let Some(q) = &filter.title_query {
            cond = cond.add(publication::Column::Title.contains(q));
        }
        if let Some(owner_id) = filter.owner_id {
            cond = cond.add(publication::Column::OwnerId.eq(owner_id));
        }
        if let Some(category_id) = filter.category_id {
            cond = cond.add(publication::Column::CategoryId.eq(category_id));
        }
        if let Some(venue_id) = filter.venue_id {
            cond = cond.add(publication::Column::VenueId.eq(venue_id));
        }
        if let Some(year_from) = filter.year_from {
            cond = cond.add(publication::Column::Year.gte(year_from));
        }
        if let Some(year_to) = filter.year_to {
            cond = cond.add(publication::Column::Year.lte(year_to));
        }
        if let Some(status) = filter.status {
            cond = cond.add(publication::Column::Status.eq(status.as_str()));
        }

        let query = publication::Entity::find().filter(cond);
        let query = match filter.sort {
            PublicationSort::Newest => query.order_by_desc(publication::Column::CreatedAt),
            PublicationSort::Oldest => query.order_by_asc(publication::Column::CreatedAt),
            PublicationSort::Title => query.order_by_asc(publication::Column::Title),
            PublicationSort::Year => query.order_by_desc(publication::Column::Year),
        };

        fetch_page(query, &self.db, page).await
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, RepoError> {
        let rows = person::Entity::find()
            .order_by_asc(person::Column::FullName)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl VenueRepository for PostgresVenueRepository {
    async fn list(&self) -> Result<Vec<Venue>, RepoError> {
        let rows = venue::Entity::find()
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn list_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
        page: &PageRequest,
    ) -> Result<PageResult<Notification>, RepoError> {
        let mut cond = Condition::all().add(notification::Column::UserId.eq(user_id));
        if unread_only {
            cond = cond.add(notification::Column::IsRead.eq(false));
        }

        fetch_page(
            notification::Entity::find()
                .filter(cond)
                .order_by_desc(notification::Column::CreatedAt),
            &self.db,
            page,
        )
        .await
    }

    async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, RepoError> {
        // Ownership enforced in the same statement as the update.
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::Id.eq(id))
            .filter(notification::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl LoginLogRepository for PostgresLoginLogRepository {
    async fn list(&self, page: &PageRequest) -> Result<PageResult<LoginLog>, RepoError> {
        fetch_page(
            login_log::Entity::find().order_by_desc(login_log::Column::CreatedAt),
            &self.db,
            page,
        )
        .await
    }
}

#[async_trait]
impl EditLogRepository for PostgresEditLogRepository {
    async fn record_edits(&self, edits: Vec<EditRecord>) -> Result<(), RepoError> {
        if edits.is_empty() {
            return Ok(());
        }

        let models: Vec<edit_log::ActiveModel> = edits.into_iter().map(Into::into).collect();
        edit_log::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(())
    }

    async fn list_for_publication(
        &self,
        publication_id: i32,
    ) -> Result<Vec<EditRecord>, RepoError> {
        // Replay order: (version, id) ascending.
        let rows = edit_log::Entity::find()
            .filter(edit_log::Column::PublicationId.eq(publication_id))
            .order_by_asc(edit_log::Column::Version)
            .order_by_asc(edit_log::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list(
        &self,
        publication_id: Option<i32>,
        page: &PageRequest,
    ) -> Result<PageResult<EditRecord>, RepoError> {
        let mut cond = Condition::all();
        if let Some(publication_id) = publication_id {
            cond = cond.add(edit_log::Column::PublicationId.eq(publication_id));
        }

        // Scoped to one publication the page reads in replay order;
        // the global audit feed reads newest first.
        let query = edit_log::Entity::find().filter(cond);
        let query = if publication_id.is_some() {
            query
                .order_by_asc(edit_log::Column::Version)
                .order_by_asc(edit_log::Column::Id)
        } else {
            query.order_by_desc(edit_log::Column::Id)
        };

        fetch_page(query, &self.db, page).await
    }
}

#[async_trait]
impl StatusHistoryRepository for PostgresStatusHistoryRepository {
    async fn list_for_publication(
        &self,
        publication_id: i32,
    ) -> Result<Vec<StatusChange>, RepoError> {
        let rows = status_history::Entity::find()
            .filter(status_history::Column::PublicationId.eq(publication_id))
            .order_by_asc(status_history::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ReviewActionRepository for PostgresReviewActionRepository {
    async fn list_for_publication(
        &self,
        publication_id: i32,
    ) -> Result<Vec<ReviewAction>, RepoError> {
        let rows = review_action::Entity::find()
            .filter(review_action::Column::PublicationId.eq(publication_id))
            .order_by_asc(review_action::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
