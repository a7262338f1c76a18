//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth

/// Request to login. Accepts either a username or an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Request to change one's own password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Admin-initiated password reset for another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Users

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Returned after an avatar upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

// ---------------------------------------------------------------------------
// Publications

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePublicationRequest {
    pub title: String,
    #[serde(default)]
    pub abstract_text: Option<String>,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year: Option<i32>,
}

/// Partial update; only present fields are diffed and applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePublicationRequest {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub category_id: Option<Option<i32>>,
    pub venue_id: Option<Option<i32>>,
    pub year: Option<Option<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationResponse {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year: Option<i32>,
    pub status: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reviewer decision on a publication under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDecisionRequest {
    pub decision: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewActionResponse {
    pub id: i32,
    pub publication_id: i32,
    pub reviewer_id: i32,
    pub decision: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// History

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditLogResponse {
    pub id: i32,
    pub publication_id: i32,
    pub version: i32,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub edited_by: i32,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryResponse {
    pub id: i32,
    pub publication_id: i32,
    pub from_status: String,
    pub to_status: String,
    pub changed_by: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One field that differs between two replayed snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDiffResponse {
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryDiffResponse {
    pub publication_id: i32,
    pub from_version: i32,
    pub to_version: i32,
    pub changes: Vec<FieldDiffResponse>,
}

// ---------------------------------------------------------------------------
// Notifications

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: i32,
    pub publication_id: Option<i32>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Logs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLogResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub success: bool,
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Catalog

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPayload {
    pub full_name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuePayload {
    pub name: String,
    pub kind: String,
    pub issn: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueResponse {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub issn: Option<String>,
}
