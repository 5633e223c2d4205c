//! Post entity and the identifier and input types around it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Opaque post identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parsing never reports a format error of its own: text that cannot name a
/// post is indistinguishable from an id with no post behind it.
impl FromStr for PostId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| StoreError::NotFound)
    }
}

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Image URL; empty when the post has no image.
    pub image: String,
    /// Sanitized HTML.
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from submitted fields with a generated ID and timestamp.
    pub fn new(fields: NewPost) -> Self {
        Self {
            id: PostId::generate(),
            title: fields.title,
            image: fields.image,
            body: fields.body,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the fields present in `changes`. `id` and `created_at` stay put.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
    }
}

/// Fields for a post that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub image: String,
    pub body: String,
}

/// Partial update of a post. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub image: Option<String>,
    pub body: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.body.is_none()
    }
}

impl From<NewPost> for PostChanges {
    fn from(fields: NewPost) -> Self {
        Self {
            title: Some(fields.title),
            image: Some(fields.image),
            body: Some(fields.body),
        }
    }
}
