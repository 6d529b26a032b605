use crate::api::cart::add_to_cart;
use crate::browser;
use crate::components::clickable_row::ClickableRow;
use crate::components::common_toast::{ToastContext, ToastType};
use log::error;
use serde::Deserialize;
use shared::CartResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub price: String,
    /// Endpoint that puts this package in the cart.
    pub cart_url: String,
    #[serde(default)]
    pub details_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopPageData {
    #[serde(default)]
    pub packages: Vec<Package>,
}

fn toast_type(response: &CartResponse) -> ToastType {
    if response.success {
        ToastType::Success
    } else {
        ToastType::Error
    }
}

#[function_component(Shop)]
pub fn shop() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let data = use_memo((), |_| browser::page_data_or_default::<ShopPageData>("shop-data"));

    let on_add = |cart_url: String| {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let toast = toast.clone();
            let cart_url = cart_url.clone();
            spawn_local(async move {
                let response = add_to_cart(&cart_url).await.unwrap_or_else(|e| {
                    error!("{}", e);
                    CartResponse::default()
                });
                toast.notify(response.message(), toast_type(&response));
            });
        })
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Packages"}</h1>
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Package"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Price"}</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {data.packages.iter().map(|package| html! {
                        <ClickableRow key={package.cart_url.clone()} href={package.details_url.clone().map(AttrValue::from)}>
                            <td class="px-4 py-2">{&package.name}</td>
                            <td class="px-4 py-2">{&package.price}</td>
                            <td class="px-4 py-2 text-right">
                                <button
                                    type="button"
                                    class="add-to-cart px-3 py-1 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700"
                                    onclick={on_add(package.cart_url.clone())}
                                >
                                    {"Add to cart"}
                                </button>
                            </td>
                        </ClickableRow>
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failed_request_reads_as_failure() {
        let response = CartResponse::default();
        assert_eq!(response.message(), "Failed to add package to cart");
        assert_eq!(toast_type(&response), ToastType::Error);
    }

    #[test]
    fn test_package_without_details_link() {
        let data: ShopPageData =
            serde_json::from_str(r#"{"packages": [{"name": "10 hours", "cart_url": "/cart/add/3"}]}"#)
                .unwrap();
        assert_eq!(data.packages[0].details_url, None);
        assert_eq!(data.packages[0].price, "");
    }
}
