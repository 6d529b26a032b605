use crate::browser;
use gloo_net::http::{Request, RequestBuilder};
use shared::models::locale::CSRF_COOKIE;

/// Creates a request carrying the `X-CSRFToken` header echoed from the
/// `csrf_token` cookie.
pub fn csrf_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    if let Some(token) = browser::cookie(CSRF_COOKIE) {
        req = req.header("X-CSRFToken", &token);
    }

    req
}

/// Creates a POST request with the CSRF header
pub fn csrf_post(url: &str) -> RequestBuilder {
    csrf_request("POST", url)
}
