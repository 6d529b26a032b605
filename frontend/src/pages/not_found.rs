use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-xl mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold text-gray-900">{"404 - Page Not Found"}</h1>
            <p class="mt-2 text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <a href="/" class="mt-4 inline-block text-blue-600 hover:underline">{"Back to home"}</a>
        </div>
    }
}
