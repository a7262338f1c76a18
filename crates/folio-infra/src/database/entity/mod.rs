//! SeaORM entities mirroring the hosted schema, with conversions to and
//! from the domain types.
//!
//! All primary keys are auto-increment integers; a domain value with
//! id 0 is treated as not-yet-persisted and inserts a fresh row.

pub mod category;
pub mod edit_log;
pub mod login_log;
pub mod notification;
pub mod person;
pub mod publication;
pub mod review_action;
pub mod status_history;
pub mod user;
pub mod venue;
