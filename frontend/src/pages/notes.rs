use crate::api::notes::delete_note;
use crate::browser;
use log::error;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesPageData {
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[function_component(Notes)]
pub fn notes() -> Html {
    let data = use_memo((), |_| browser::page_data_or_default::<NotesPageData>("notes-data"));

    // The home page is reloaded whatever the outcome
    let on_delete = |note_id: u64| {
        Callback::from(move |_: MouseEvent| {
            spawn_local(async move {
                if let Err(e) = delete_note(note_id).await {
                    error!("{}", e);
                }
                browser::navigate("/");
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Notes"}</h1>
            if data.notes.is_empty() {
                <p class="text-gray-500">{"No notes yet."}</p>
            }
            <ul class="space-y-3">
                {data.notes.iter().map(|note| html! {
                    <li key={note.id} class="flex justify-between items-start p-4 bg-white border border-gray-200 rounded-md">
                        <div>
                            <p class="text-gray-900">{&note.text}</p>
                            <p class="text-xs text-gray-500">{&note.created}</p>
                        </div>
                        <button
                            type="button"
                            class="delete-note ml-4 text-sm text-red-600 hover:text-red-800"
                            onclick={on_delete(note.id)}
                        >
                            {"Delete"}
                        </button>
                    </li>
                }).collect::<Html>()}
            </ul>
        </div>
    }
}
