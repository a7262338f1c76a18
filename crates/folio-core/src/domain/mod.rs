//! Domain entities and workflow rules.

mod activity;
mod catalog;
mod history;
mod notification;
mod publication;
mod user;

pub use activity::{EditRecord, LoginLog, ReviewAction, ReviewDecision, StatusChange};
pub use catalog::{Category, Person, Venue, VenueKind};
pub use history::{FieldDiff, diff_between, snapshot_at};
pub use notification::Notification;
pub use publication::{Publication, PublicationStatus};
pub use user::{Role, User};
