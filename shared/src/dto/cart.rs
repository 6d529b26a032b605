use serde::{Deserialize, Serialize};

/// Reply of the add-to-cart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
}

impl CartResponse {
    pub fn message(&self) -> &'static str {
        if self.success {
            "Package added to cart"
        } else {
            "Failed to add package to cart"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cart_response_message() {
        let ok: CartResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok.message(), "Package added to cart");

        let missing: CartResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.message(), "Failed to add package to cart");
    }
}
