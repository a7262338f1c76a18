use async_trait::async_trait;

use crate::domain::{
    Category, EditRecord, LoginLog, Notification, Person, Publication, PublicationStatus,
    ReviewAction, StatusChange, User, Venue,
};
use crate::error::RepoError;

/// Pagination request. `page` is 1-based; `per_page` is clamped by the
/// constructor.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u64 = 100;
    pub const DEFAULT_PER_PAGE: u64 = 20;

    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Zero-based page index for the paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the total row count.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Sort order for publication listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicationSort {
    #[default]
    Newest,
    Oldest,
    Title,
    Year,
}

/// Conditional filters for publication listing and search. Unset fields
/// add no constraint.
#[derive(Debug, Clone, Default)]
pub struct PublicationFilter {
    pub title_query: Option<String>,
    pub owner_id: Option<i32>,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub status: Option<PublicationStatus>,
    pub sort: PublicationSort,
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (insert when the id is unset, update otherwise).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by username or email address (login identifier).
    async fn find_by_username_or_email(&self, identifier: &str)
    -> Result<Option<User>, RepoError>;

    async fn list(&self, page: &PageRequest) -> Result<PageResult<User>, RepoError>;
}

/// Publication repository.
#[async_trait]
pub trait PublicationRepository: BaseRepository<Publication, i32> {
    /// Filtered, sorted, paginated listing.
    async fn search(
        &self,
        filter: &PublicationFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Publication>, RepoError>;
}

#[async_trait]
pub trait PersonRepository: BaseRepository<Person, i32> {
    async fn list(&self) -> Result<Vec<Person>, RepoError>;
}

#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i32> {
    async fn list(&self) -> Result<Vec<Category>, RepoError>;
}

#[async_trait]
pub trait VenueRepository: BaseRepository<Venue, i32> {
    async fn list(&self) -> Result<Vec<Venue>, RepoError>;
}

#[async_trait]
pub trait NotificationRepository: BaseRepository<Notification, i32> {
    /// Notifications for a user, newest first.
    async fn list_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
        page: &PageRequest,
    ) -> Result<PageResult<Notification>, RepoError>;

    /// Mark a notification read; returns false when no row belongs to
    /// the user.
    async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait LoginLogRepository: BaseRepository<LoginLog, i32> {
    async fn list(&self, page: &PageRequest) -> Result<PageResult<LoginLog>, RepoError>;
}

#[async_trait]
pub trait EditLogRepository: BaseRepository<EditRecord, i32> {
    /// Append the rows produced by one edit save.
    async fn record_edits(&self, edits: Vec<EditRecord>) -> Result<(), RepoError>;

    /// All edit rows for a publication ordered by (version, id) ascending.
    async fn list_for_publication(&self, publication_id: i32)
    -> Result<Vec<EditRecord>, RepoError>;

    /// Paginated listing, optionally restricted to one publication.
    async fn list(
        &self,
        publication_id: Option<i32>,
        page: &PageRequest,
    ) -> Result<PageResult<EditRecord>, RepoError>;
}

#[async_trait]
pub trait StatusHistoryRepository: BaseRepository<StatusChange, i32> {
    async fn list_for_publication(
        &self,
        publication_id: i32,
    ) -> Result<Vec<StatusChange>, RepoError>;
}

#[async_trait]
pub trait ReviewActionRepository: BaseRepository<ReviewAction, i32> {
    async fn list_for_publication(
        &self,
        publication_id: i32,
    ) -> Result<Vec<ReviewAction>, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults_and_clamps() {
        let def = PageRequest::new(None, None);
        assert_eq!(def.page, 1);
        assert_eq!(def.per_page, PageRequest::DEFAULT_PER_PAGE);

        let clamped = PageRequest::new(Some(0), Some(10_000));
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.per_page, PageRequest::MAX_PER_PAGE);
        assert_eq!(clamped.index(), 0);

        assert_eq!(PageRequest::new(Some(3), Some(25)).index(), 2);
    }
}
