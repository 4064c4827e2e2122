use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ListCursor, StatusId, UserId};

/// The authenticated caller's own account, as resolved by the identity
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    pub screen_name: String,
}

impl Account {
    pub fn new(id: UserId, screen_name: impl Into<String>) -> Self {
        Self {
            id,
            screen_name: screen_name.into(),
        }
    }
}

/// A related account returned by a listing call, carrying its latest
/// status when the account has ever posted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub screen_name: String,
    pub name: String,
    pub status: Option<Status>,
}

/// A single feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub user_id: UserId,
    pub screen_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One page of a listing response together with its continuation tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub next_cursor: ListCursor,
    pub previous_cursor: ListCursor,
}

impl UserPage {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_end()
    }
}
