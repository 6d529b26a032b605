use serde::{Deserialize, Serialize};

/// Body of `POST /delete-note`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNoteRequest {
    #[serde(rename = "noteId")]
    pub note_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_note_body() {
        let body = serde_json::to_string(&DeleteNoteRequest { note_id: 12 }).unwrap();
        assert_eq!(body, r#"{"noteId":12}"#);
    }
}
