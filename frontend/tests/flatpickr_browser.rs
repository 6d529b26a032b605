#![cfg(target_arch = "wasm32")]

use frontend::flatpickr::{first_selected_millis, FlatpickrManager, PickerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window_get(key: &str) -> JsValue {
    js_sys::Reflect::get(&gloo_utils::window(), &JsValue::from_str(key)).unwrap()
}

fn window_set(key: &str, value: &JsValue) {
    js_sys::Reflect::set(&gloo_utils::window(), &JsValue::from_str(key), value).unwrap();
}

fn field(object: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(object, &JsValue::from_str(key)).unwrap()
}

/// Stand-in for the global flatpickr: records its arguments and counts
/// `destroy` calls on the returned instance.
fn install_fake_flatpickr() {
    let fake = js_sys::Function::new_with_args(
        "selector, options",
        "window.__pickerSelector = selector;
         window.__pickerOptions = options;
         window.__pickerDestroyed = 0;
         return { destroy: function () { window.__pickerDestroyed += 1; } };",
    );
    window_set("flatpickr", &fake);
}

#[wasm_bindgen_test]
fn test_init_hands_selector_and_options_to_flatpickr() {
    install_fake_flatpickr();
    let on_change = js_sys::Function::new_no_args("");

    let mut manager = FlatpickrManager::new();
    manager
        .init("date_NonStop", &PickerOptions::booking(), Some(&on_change))
        .unwrap();

    assert_eq!(window_get("__pickerSelector").as_string().as_deref(), Some("#date_NonStop"));
    let options = window_get("__pickerOptions");
    assert_eq!(field(&options, "enableTime").as_bool(), Some(true));
    assert_eq!(field(&options, "dateFormat").as_string().as_deref(), Some("Y-m-d H:i"));
    assert_eq!(field(&options, "time_24hr").as_bool(), Some(true));
    assert_eq!(field(&options, "minuteIncrement").as_f64(), Some(15.0));
    assert!(field(&options, "onChange").is_function());

    drop(manager);
    assert_eq!(window_get("__pickerDestroyed").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn test_init_fails_without_flatpickr_loaded() {
    window_set("flatpickr", &JsValue::UNDEFINED);
    let mut manager = FlatpickrManager::new();
    assert!(manager.init("date_NonStop", &PickerOptions::booking(), None).is_err());
}

#[wasm_bindgen_test]
fn test_first_selected_date_in_millis() {
    let dates = js_sys::Array::of1(&js_sys::Date::new(&JsValue::from_f64(1_714_600_800_000.0)));
    assert_eq!(first_selected_millis(&dates), Some(1_714_600_800_000));
    assert_eq!(first_selected_millis(&js_sys::Array::new()), None);
}
