//! User accounts and the team roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a console account.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Operator,
}

/// Presence of a user as shown in the roster.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    #[default]
    Offline,
    Away,
}

/// An operator or admin account.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub presence: Presence,
    pub last_seen: DateTime<Utc>,
}

impl User {
    /// Create an account with a fresh id; presence starts offline.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            presence: Presence::Offline,
            last_seen: Utc::now(),
        }
    }
}

/// A user plus roster bookkeeping.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamMember {
    #[serde(flatten)]
    pub user: User,
    pub invited_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(user: User) -> Self {
        Self {
            user,
            invited_at: Utc::now(),
        }
    }

    /// Id of the underlying account.
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}
