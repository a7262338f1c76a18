//! Database connection management and SeaORM repositories.

mod connections;
mod postgres_base;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::{
    PostgresCategoryRepository, PostgresEditLogRepository, PostgresLoginLogRepository,
    PostgresNotificationRepository, PostgresPersonRepository, PostgresPublicationRepository,
    PostgresReviewActionRepository, PostgresStatusHistoryRepository, PostgresUserRepository,
    PostgresVenueRepository,
};

#[cfg(test)]
mod tests;
