use crate::api::api_url;
use gloo_net::http::Request;
use log::debug;
use shared::DeleteNoteRequest;

pub async fn delete_note(note_id: u64) -> Result<(), String> {
    debug!("Deleting note {}", note_id);

    let response = Request::post(&api_url("/delete-note"))
        .json(&DeleteNoteRequest { note_id })
        .map_err(|e| format!("Failed to serialize note request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to delete note: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete note: HTTP {}", response.status()));
    }
    Ok(())
}
