use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A user returned by `GET /search_users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSuggestionDto {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telephone: String,
}

impl UserSuggestionDto {
    pub fn photo_url(&self) -> String {
        format!("/display_user_image/{}", self.id)
    }
}

/// Query string for the user search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSearchQuery {
    #[validate(length(min = 3, message = "Search query must be at least 3 characters"))]
    pub query: String,
}

impl UserSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn to_query_string(&self) -> String {
        format!("query={}", urlencoding::encode(&self.query))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
