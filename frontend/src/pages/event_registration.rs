use crate::browser;
use crate::components::common_toast::ToastContext;
use crate::components::user_search::UserSearch;
use serde::Deserialize;
use shared::{RegistrationForm, SearchMode, UserSuggestionDto};
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationPageData {
    #[serde(default)]
    pub action: String,
}

fn apply(form: &UseStateHandle<RegistrationForm>, change: impl FnOnce(&mut RegistrationForm)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}

/// Adds a player to an event, either an existing user picked from the
/// search or a walk-in typed by hand.
#[function_component(EventRegistration)]
pub fn event_registration() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let data = use_memo((), |_| {
        browser::page_data_or_default::<RegistrationPageData>("registration-data")
    });
    let form = use_state(|| RegistrationForm::new(SearchMode::EventRegistration));
    let photo_ref = use_node_ref();

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |value: String| {
            apply(&form, |f| f.set_search_text(value))
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |user: UserSuggestionDto| apply(&form, |f| f.select(&user)))
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            apply(&form, |f| f.set_email(value))
        })
    };

    let on_telephone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            apply(&form, |f| f.set_telephone(value))
        })
    };

    let on_photo = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            apply(&form, |f| f.photo = value)
        })
    };

    let on_clear = {
        let form = form.clone();
        let photo_ref = photo_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = photo_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            apply(&form, RegistrationForm::clear)
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
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Add player to event"}</h1>
            <form method="post" action={data.action.clone()} enctype="multipart/form-data" onsubmit={on_submit} class="space-y-4">
                <div class="flex items-end space-x-2">
                    <div class="flex-1">
                        <UserSearch
                            input_id="fullname"
                            input_name="fullname"
                            label="Name"
                            value={form.name.clone()}
                            on_input={on_name_input}
                            on_select={on_select}
                        />
                    </div>
                    if form.clear_visible() {
                        <button
                            id="clearButton"
                            type="button"
                            onclick={on_clear}
                            class="px-3 py-2 text-sm bg-gray-200 rounded-md hover:bg-gray-300"
                        >
                            {"Clear"}
                        </button>
                    }
                </div>

                <div class="space-y-1">
                    <label for="email" class="block text-sm font-medium text-gray-700">{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        readonly={form.is_locked()}
                        value={form.email.clone()}
                        oninput={on_email}
                        class={classes!("w-full", "px-3", "py-2", "border", "border-gray-300", "rounded-md", form.is_locked().then_some("bg-gray-100"))}
                    />
                </div>

                <div class="space-y-1">
                    <label for="telephone" class="block text-sm font-medium text-gray-700">{"Telephone"}</label>
                    <input
                        id="telephone"
                        name="telephone"
                        type="tel"
                        readonly={form.is_locked()}
                        value={form.telephone.clone()}
                        oninput={on_telephone}
                        class={classes!("w-full", "px-3", "py-2", "border", "border-gray-300", "rounded-md", form.is_locked().then_some("bg-gray-100"))}
                    />
                </div>

                <input
                    id="user_id"
                    name="user_id"
                    type="hidden"
                    value={form.user_id().map(|id| id.to_string()).unwrap_or_default()}
                />

                <div class="space-y-1">
                    <label for="photo" class="block text-sm font-medium text-gray-700">{"Photo"}</label>
                    <input id="photo" name="photo" type="file" accept="image/*" ref={photo_ref} onchange={on_photo} />
                </div>

                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                    {"Add to event"}
                </button>
            </form>
        </div>
    }
}
