//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;
mod storage;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use repository::{
    BaseRepository, CategoryRepository, EditLogRepository, LoginLogRepository,
    NotificationRepository, PageRequest, PageResult, PersonRepository, PublicationFilter,
    PublicationRepository, PublicationSort, ReviewActionRepository, StatusHistoryRepository,
    UserRepository, VenueRepository,
};
pub use storage::{ObjectStore, StorageError};
