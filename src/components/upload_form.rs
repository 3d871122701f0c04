use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

/// Aviso del controlador al formulario: `true` si la subida terminó bien.
pub type UploadFinished = Callback<bool>;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub on_upload: Callback<(File, UploadFinished)>,
}

/// Control de subida de CSV: Idle → FileChosen → Uploading → Idle.
/// Si la subida falla, el archivo queda seleccionado para reintentar.
#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let selected_file = use_state(|| None::<File>);
    let uploading = use_state(|| false);
    let file_input_ref = use_node_ref();

    let on_file_change = {
        let selected_file = selected_file.clone();
        let file_input_ref = file_input_ref.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.files().and_then(|files| files.get(0)) {
                // La extensión se comprueba tal cual, sensible a mayúsculas
                Some(file) if is_csv_file(&file.name()) => {
                    selected_file.set(Some(file));
                }
                Some(_) => {
                    selected_file.set(None);
                    if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                    alert("Please select a CSV file");
                }
                None => selected_file.set(None),
            }
        })
    };

    let on_upload_click = {
        let selected_file = selected_file.clone();
        let uploading = uploading.clone();
        let file_input_ref = file_input_ref.clone();
        let on_upload = props.on_upload.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(file) = (*selected_file).clone() else {
                alert("Please select a file first");
                return;
            };

            uploading.set(true);

            let finished: UploadFinished = {
                let selected_file = selected_file.clone();
                let uploading = uploading.clone();
                let file_input_ref = file_input_ref.clone();

                Callback::from(move |success: bool| {
                    uploading.set(false);
                    if success {
                        selected_file.set(None);
                        if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    }
                    // En fallo el archivo sigue seleccionado: reintento a un click
                })
            };

            on_upload.emit((file, finished));
        })
    };

    html! {
        <div class="upload-form">
            <h3>{"Upload CSV Dataset"}</h3>
            <div class="upload-controls">
                <input
                    id="csv-file-input"
                    type="file"
                    accept=".csv"
                    ref={file_input_ref}
                    onchange={on_file_change}
                    disabled={*uploading}
                />
                <button
                    class="upload-btn"
                    onclick={on_upload_click}
                    disabled={selected_file.is_none() || *uploading}
                >
                    { if *uploading { "Uploading..." } else { "Upload" } }
                </button>
            </div>
            {
                if let Some(file) = &*selected_file {
                    html! {
                        <div class="file-info">
                            {format!("Selected: {} ({:.2} KB)", file.name(), file.size() / 1024.0)}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn is_csv_file(name: &str) -> bool {
    name.ends_with(".csv")
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_extension() {
        assert!(is_csv_file("report.csv"));
        assert!(is_csv_file("2026-08 datos.csv"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_csv_file("report.txt"));
        assert!(!is_csv_file("report.csv.bak"));
        assert!(!is_csv_file("report"));
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        assert!(!is_csv_file("REPORT.CSV"));
        assert!(!is_csv_file("report.Csv"));
    }
}
