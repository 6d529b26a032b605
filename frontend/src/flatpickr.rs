use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// flatpickr is loaded by the page as a global function; we reach it through
// js_sys::Reflect instead of a static binding so pages without it still load.

/// Picker settings, mirrored onto the JS options object.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub enable_time: bool,
    pub date_format: &'static str,
    pub time_24hr: bool,
    pub minute_increment: u32,
}

impl PickerOptions {
    /// Booking slots start on the quarter hour.
    pub fn booking() -> Self {
        Self {
            enable_time: true,
            date_format: "Y-m-d H:i",
            time_24hr: true,
            minute_increment: 15,
        }
    }

    fn to_js(&self, on_change: Option<&js_sys::Function>) -> Result<js_sys::Object, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("enableTime"),
            &JsValue::from_bool(self.enable_time),
        )?;
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("dateFormat"),
            &JsValue::from_str(self.date_format),
        )?;
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("time_24hr"),
            &JsValue::from_bool(self.time_24hr),
        )?;
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("minuteIncrement"),
            &JsValue::from_f64(f64::from(self.minute_increment)),
        )?;
        if let Some(callback) = on_change {
            js_sys::Reflect::set(&options, &JsValue::from_str("onChange"), callback)?;
        }
        Ok(options)
    }
}

/// Tracks the flatpickr instances a page created so they can be torn down.
#[derive(Default)]
pub struct FlatpickrManager {
    instances: HashMap<String, JsValue>,
}

impl FlatpickrManager {
    pub fn new() -> Self {
        Self::default()
    }

    // Initialize flatpickr on an element
    pub fn init(
        &mut self,
        element_id: &str,
        options: &PickerOptions,
        on_change: Option<&js_sys::Function>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let flatpickr = js_sys::Reflect::get(&window, &JsValue::from_str("flatpickr"))?;
        let flatpickr: js_sys::Function = flatpickr
            .dyn_into()
            .map_err(|_| JsValue::from_str("flatpickr is not loaded"))?;

        let selector = JsValue::from_str(&format!("#{}", element_id));
        let js_options = JsValue::from(options.to_js(on_change)?);
        let instance = flatpickr.call2(&JsValue::NULL, &selector, &js_options)?;

        if instance.is_null() || instance.is_undefined() {
            return Err(JsValue::from_str("Failed to initialize flatpickr"));
        }

        self.instances.insert(element_id.to_string(), instance);
        Ok(())
    }

    // Destroy all instances
    pub fn destroy_all(&mut self) -> Result<(), JsValue> {
        for (_, instance) in self.instances.drain() {
            destroy_instance(&instance)?;
        }
        Ok(())
    }
}

fn destroy_instance(instance: &JsValue) -> Result<(), JsValue> {
    let destroy = js_sys::Reflect::get(instance, &JsValue::from_str("destroy"))?;
    if let Ok(destroy) = destroy.dyn_into::<js_sys::Function>() {
        destroy.call0(instance)?;
    }
    Ok(())
}

/// First picked date of an `onChange` call, in epoch milliseconds.
pub fn first_selected_millis(selected_dates: &JsValue) -> Option<i64> {
    let dates = selected_dates.dyn_ref::<js_sys::Array>()?;
    let first = dates.get(0).dyn_into::<js_sys::Date>().ok()?;
    let millis = first.get_time();
    (!millis.is_nan()).then_some(millis as i64)
}

impl Drop for FlatpickrManager {
    fn drop(&mut self) {
        let _ = self.destroy_all();
    }
}
