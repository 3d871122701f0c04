use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Entrega `bytes` al navegador como descarga de archivo.
/// Crea un blob, lo cuelga de un <a> temporal y simula el click.
pub fn trigger_download(bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Error creando el blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Error creando la URL del blob".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No se pudo acceder al document")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Error creando el elemento <a>".to_string())?
        .dyn_into()
        .map_err(|_| "Error creando el elemento <a>".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
