//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! Fields the pages never read but the API may send (`published`, `user`,
//! `email`, tag `created_at`) are accepted as optional so a richer server
//! response never breaks decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A blog post as returned by `/api/v1/posts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Relative media path, served from the site root.
    #[serde(default)]
    pub image: Option<String>,
    /// Server-formatted timestamp (`YYYY-MM-DD HH:MM:SS`).
    pub created_at: String,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Post {
    /// Browser URL of the post image, if the post has one.
    pub fn image_src(&self) -> Option<String> {
        self.image
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("/{}", path.trim_start_matches('/')))
    }

    /// Tags attached to the post, empty when the API omitted them.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }
}

/// A registered author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A post tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub input_password: String,
}

/// Token-bearing body returned by login and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Body of `POST /api/v1/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}
