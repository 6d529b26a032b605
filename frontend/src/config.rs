pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Same-origin: the club site serves both pages and endpoints
        "".to_string()
    }
}
