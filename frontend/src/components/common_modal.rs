use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    /// Emits `true` for the confirm button, `false` for cancel.
    pub on_answer: Callback<bool>,
    #[prop_or_else(default_confirm_text)]
    pub confirm_text: String,
    #[prop_or_else(default_cancel_text)]
    pub cancel_text: String,
}

fn default_confirm_text() -> String {
    "Yes".to_string()
}

fn default_cancel_text() -> String {
    "No".to_string()
}

/// Yes/no question over a dimmed overlay. Clicking the overlay counts as
/// "no", like dismissing the dialog.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_answer.emit(false);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let answer = |value: bool| {
        let on_answer = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| on_answer.emit(value))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4"
                onclick={on_modal_click}
            >
                <div class="mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                </div>
                <div class="mb-6">
                    <p class="text-sm text-gray-600">{&props.message}</p>
                </div>
                // Cancel first, matching the reversed button order of the club site
                <div class="flex justify-end space-x-3">
                    <button
                        type="button"
                        onclick={answer(false)}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                    >
                        {&props.cancel_text}
                    </button>
                    <button
                        type="button"
                        onclick={answer(true)}
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
                    >
                        {&props.confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
