use crate::browser;
use crate::components::common_modal::ConfirmModal;
use log::{debug, error};
use serde::Deserialize;
use shared::models::gameday::{plan_submit, update_subsequent_value, CONFIRM_QUESTION, CONFIRM_TITLE};
use shared::GameDaySubmit;
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDayPageData {
    /// Date as rendered into the form, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameDayEditProps {
    pub gameday_id: String,
}

fn submit_form(form_ref: &NodeRef) {
    match form_ref.cast::<web_sys::HtmlFormElement>() {
        Some(form) => {
            if let Err(e) = form.submit() {
                error!("Failed to submit game day form: {:?}", e);
            }
        }
        None => error!("Game day form not mounted"),
    }
}

/// Game day editor. Moving the date asks whether the following game days
/// move along before the form goes out.
#[function_component(GameDayEdit)]
pub fn gameday_edit(props: &GameDayEditProps) -> Html {
    let data = use_memo((), |_| {
        browser::page_data_or_default::<GameDayPageData>("gameday-data")
    });
    let date = {
        let data = data.clone();
        use_state(move || data.date.clone())
    };
    let confirm_open = use_state(|| false);
    let form_ref = use_node_ref();
    let subsequent_ref = use_node_ref();

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_submit = {
        let data = data.clone();
        let date = date.clone();
        let confirm_open = confirm_open.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match plan_submit(&data.date, &date) {
                GameDaySubmit::Direct => submit_form(&form_ref),
                GameDaySubmit::Confirm => confirm_open.set(true),
            }
        })
    };

    // The hidden field is written straight into the DOM: the form is
    // submitted before the next render
    let on_answer = {
        let confirm_open = confirm_open.clone();
        let form_ref = form_ref.clone();
        let subsequent_ref = subsequent_ref.clone();
        Callback::from(move |confirmed: bool| {
            confirm_open.set(false);
            let value = update_subsequent_value(confirmed);
            debug!("update_subsequent={}", value);
            if let Some(input) = subsequent_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value(value);
            }
            submit_form(&form_ref);
        })
    };

    html! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Edit game day"}</h1>
            <form ref={form_ref} method="post" action={data.action.clone()} onsubmit={on_submit} class="space-y-4">
                <input type="hidden" name="gameday_id" value={props.gameday_id.clone()} />
                <input ref={subsequent_ref} type="hidden" id="update_subsequent" name="update_subsequent" value="false" />
                <div class="space-y-1">
                    <label for="date" class="block text-sm font-medium text-gray-700">{"Date"}</label>
                    <input
                        id="date"
                        name="date"
                        type="date"
                        value={(*date).clone()}
                        onchange={on_date}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    />
                </div>
                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                    {"Save"}
                </button>
            </form>

            <ConfirmModal
                is_open={*confirm_open}
                title={CONFIRM_TITLE.to_string()}
                message={CONFIRM_QUESTION.to_string()}
                on_answer={on_answer}
            />
        </div>
    }
}
