use crate::browser;
use serde::Deserialize;
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePageData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub action: String,
}

/// Profile page; the avatar doubles as the upload button.
#[function_component(Profile)]
pub fn profile() -> Html {
    let data = use_memo((), |_| browser::page_data_or_default::<ProfilePageData>("profile-data"));
    let file_input = use_node_ref();

    let on_photo_click = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<web_sys::HtmlElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <form method="post" action={data.action.clone()} enctype="multipart/form-data" class="flex flex-col items-center space-y-4">
                <img
                    id="profileImage"
                    src={data.photo_url.clone()}
                    alt={data.name.clone()}
                    onclick={on_photo_click}
                    class="w-32 h-32 rounded-full object-cover cursor-pointer ring-2 ring-blue-500"
                    title="Change photo"
                />
                <input ref={file_input} id="photoInput" name="photo" type="file" accept="image/*" class="hidden" />
                <h1 class="text-xl font-bold text-gray-900">{&data.name}</h1>
                <p class="text-sm text-gray-600">{&data.email}</p>
                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                    {"Save"}
                </button>
            </form>
        </div>
    }
}
