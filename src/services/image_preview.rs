// ============================================================================
// IMAGE PREVIEW - Lectura local del archivo seleccionado (sin red)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Lee el archivo como data URL para mostrarlo en el `<img>` de preview
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_ok = reader.clone();
        let onload = Closure::once_into_js(move |_e: web_sys::Event| {
            let _ = resolve.call1(&JsValue::NULL, &reader_ok.result().unwrap_or(JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move |_e: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("FileReader error"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file)?;
    let result = JsFuture::from(promise).await?;

    result
        .as_string()
        .ok_or_else(|| JsValue::from_str("FileReader did not return a data URL"))
}
