use serde::{Deserialize, Serialize};

/// Body of `POST /checkMatches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckMatchesRequest {
    #[serde(rename = "dateStart")]
    pub date_start: String,
    #[serde(rename = "dateEnd")]
    pub date_end: String,
}

impl CheckMatchesRequest {
    /// Form-encoded body, the shape the availability endpoint reads.
    pub fn to_form_body(&self) -> String {
        format!(
            "dateStart={}&dateEnd={}",
            urlencoding::encode(&self.date_start),
            urlencoding::encode(&self.date_end)
        )
    }
}

/// Reply of `POST /checkMatches`: courts already taken in the window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckMatchesResponse {
    #[serde(rename = "busyCourts", default, deserialize_with = "court_ids")]
    pub busy_courts: Vec<String>,
}

/// Court ids arrive as numbers or strings depending on the page.
fn court_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}
