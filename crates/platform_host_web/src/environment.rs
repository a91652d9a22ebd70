//! Browser environment probe over `navigator`, `performance.memory`, and
//! `Date.toLocaleString`.
//!
//! `navigator.deviceMemory` and `performance.memory` are non-standard and missing from
//! `web_sys`, so they are read through `js_sys::Reflect`.

use platform_host::{EnvironmentProbe, HeapUsage};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
/// Environment probe backed by the browser window.
pub struct WebEnvironmentProbe;

#[cfg(target_arch = "wasm32")]
fn reflect_f64(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|value| value.is_finite())
}

impl EnvironmentProbe for WebEnvironmentProbe {
    fn hardware_concurrency(&self) -> Option<u32> {
        #[cfg(target_arch = "wasm32")]
        {
            let cores = web_sys::window()?.navigator().hardware_concurrency();
            (cores.is_finite() && cores > 0.0).then_some(cores as u32)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn device_memory_gb(&self) -> Option<f64> {
        #[cfg(target_arch = "wasm32")]
        {
            let navigator = web_sys::window()?.navigator();
            reflect_f64(&navigator, "deviceMemory")
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn user_agent(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?
                .navigator()
                .user_agent()
                .ok()
                .filter(|agent| !agent.is_empty())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn heap_usage(&self) -> Option<HeapUsage> {
        #[cfg(target_arch = "wasm32")]
        {
            let performance = web_sys::window()?.performance()?;
            let memory = js_sys::Reflect::get(&performance, &JsValue::from_str("memory")).ok()?;
            if memory.is_undefined() || memory.is_null() {
                return None;
            }
            Some(HeapUsage {
                used_bytes: reflect_f64(&memory, "usedJSHeapSize")?,
                total_bytes: reflect_f64(&memory, "totalJSHeapSize")?,
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn local_time(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            String::from(js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            platform_host::UNKNOWN.to_string()
        }
    }
}
