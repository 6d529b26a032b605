use crate::browser;
use crate::components::common_toast::ToastContext;
use crate::components::user_search::UserSearch;
use serde::Deserialize;
use shared::{RegistrationForm, SearchMode, UserSuggestionDto};
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubUsersPageData {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub club_name: String,
}

/// Adds an existing user to the club by email. The search box is the email
/// field itself; picking a suggestion only fills that address in.
#[function_component(ClubUsers)]
pub fn club_users() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let data = use_memo((), |_| {
        browser::page_data_or_default::<ClubUsersPageData>("club-users-data")
    });
    let form = use_state(|| RegistrationForm::new(SearchMode::ClubMember));

    let on_input = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set_search_text(value);
            form.set(next);
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |user: UserSuggestionDto| {
            let mut next = (*form).clone();
            next.select(&user);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            if let Err(err) = form.validate_submit() {
                e.prevent_default();
                toast.error(&err);
            }
        })
    };

    html! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">
                if data.club_name.is_empty() {
                    {"Add user to club"}
                } else {
                    {format!("Add user to {}", data.club_name)}
                }
            </h1>
            <form method="post" action={data.action.clone()} onsubmit={on_submit} class="space-y-4">
                <UserSearch
                    input_id="user_email"
                    input_name="user_email"
                    label="Email"
                    value={form.search_text().to_string()}
                    on_input={on_input}
                    on_select={on_select}
                />
                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                    {"Add user"}
                </button>
            </form>
        </div>
    }
}
