//! Customer - the people conversations and orders belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A known customer record.
///
/// Order creation resolves the customer contact from this record, so
/// `name` and `phone` are required while everything else is optional
/// profile data.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conversation_count: u32,
    #[serde(default)]
    pub order_count: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            tags: Vec::new(),
            notes: None,
            last_contact: None,
            conversation_count: 0,
            order_count: 0,
        }
    }

    /// Check whether the record carries the contact details order
    /// creation needs.
    pub fn has_contact_details(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
