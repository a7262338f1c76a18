use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-app notification addressed to a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub publication_id: Option<i32>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: i32, publication_id: Option<i32>, message: String) -> Self {
        Self {
            id: 0,
            user_id,
            publication_id,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
