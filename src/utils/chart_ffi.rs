// ============================================================================
// CHART FFI - Foreign Function Interface para Chart.js
// ============================================================================
// Solo wrappers para funciones JS (definidas en index.html) - Sin estado
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderDistributionChart)]
    pub fn render_distribution_chart(canvas_id: &str, labels_json: &str, counts_json: &str);
}

/// Helper: destruir el chart si existe (al desmontar o quedarse sin datos)
pub fn destroy_distribution_chart(canvas_id: &str) {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(&format!(
            "if (window.destroyDistributionChart) window.destroyDistributionChart('{}');",
            canvas_id
        ));
        let _ = function.call0(&window.into());
    }
}
