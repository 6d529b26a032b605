use crate::api::api_url;
use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, UserSearchQuery, UserSuggestionDto};
use validator::Validate;

pub async fn search_users(query: &str) -> Result<Vec<UserSuggestionDto>, String> {
    let query = UserSearchQuery::new(query);
    query
        .validate()
        .map_err(|e| format!("Invalid search query: {}", e))?;
    debug!("Searching users with query: {}", query.query);

    let response = Request::get(&format!(
        "{}?{}",
        api_url("/search_users"),
        query.to_query_string()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to search users: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let users = response
        .json::<Vec<UserSuggestionDto>>()
        .await
        .map_err(|e| format!("Failed to parse users response: {}", e))?;

    debug!("Successfully found {} users", users.len());
    Ok(users)
}
