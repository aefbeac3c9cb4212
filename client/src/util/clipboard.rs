//! Clipboard writes for the debug authoring tool.
//!
//! A failed write is logged and otherwise ignored; the map keeps working.

/// Copy `text` to the system clipboard in the background.
pub fn copy_text(text: String) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match write_text(&text).await {
                Ok(()) => log::info!("copied new planet record to clipboard"),
                Err(e) => log::error!("clipboard write failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}

#[cfg(feature = "csr")]
async fn write_text(text: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    // `navigator.clipboard` is undefined outside secure contexts.
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined())
        .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok())
        .ok_or_else(|| "clipboard unavailable".to_owned())?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
