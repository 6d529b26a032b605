use crate::api::api_url;
use crate::api::utils::csrf_post;
use log::debug;
use shared::{CheckMatchesRequest, CheckMatchesResponse, ErrorResponse};

/// Asks the server which courts are already taken in the requested window.
pub async fn check_matches(request: &CheckMatchesRequest) -> Result<CheckMatchesResponse, String> {
    debug!(
        "Checking matches between {} and {}",
        request.date_start, request.date_end
    );

    let response = csrf_post(&api_url("/checkMatches"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(request.to_form_body())
        .map_err(|e| format!("Failed to build availability request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to check matches: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let availability = response
        .json::<CheckMatchesResponse>()
        .await
        .map_err(|e| format!("Failed to parse availability response: {}", e))?;

    debug!("{} court(s) busy in window", availability.busy_courts.len());
    Ok(availability)
}
