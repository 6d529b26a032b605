use crate::api::utils::csrf_post;
use log::debug;
use shared::CartResponse;

/// Adds the package behind `item_url` to the cart.
pub async fn add_to_cart(item_url: &str) -> Result<CartResponse, String> {
    debug!("Adding package to cart: {}", item_url);

    let response = csrf_post(item_url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to add package to cart: {}", e))?;

    let result = response
        .json::<CartResponse>()
        .await
        .map_err(|e| format!("Failed to parse cart response: {}", e))?;

    debug!("Cart response success={}", result.success);
    Ok(result)
}
