use serde::Deserialize;
use thiserror::Error;

/// Fallos de comunicación con el backend.
/// El `Display` de cada variante es el texto que ve el usuario en el banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Credenciales rechazadas (login/registro)
    #[error("{0}")]
    Auth(String),

    /// El backend rechazó el contenido del CSV
    #[error("{0}")]
    Validation(String),

    /// 404 en los GET del dashboard: todavía no hay dataset.
    /// Estado vacío esperado, no un fallo.
    #[error("No dataset uploaded yet")]
    NotFound,

    /// No llegó ninguna respuesta del servidor
    #[error("Network error. Please check if backend is running.")]
    Network(String),

    /// Estado HTTP inesperado o cuerpo que no se pudo parsear
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

/// Cuerpo de error estándar del backend: {error, details}.
/// `details` puede ser un string o un objeto de validación por campo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Extrae el mensaje a mostrar: preferimos `error`, luego `details`,
/// y si no hay nada usable, el fallback genérico.
pub fn backend_message(body: &ErrorBody, fallback: &str) -> String {
    if let Some(error) = &body.error {
        if !error.is_empty() {
            return error.clone();
        }
    }

    match &body.details {
        Some(serde_json::Value::String(details)) if !details.is_empty() => details.clone(),
        Some(serde_json::Value::Null) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prefers_error_field() {
        let body = body(r#"{"error": "missing column: flowrate", "details": "ignored"}"#);
        assert_eq!(
            backend_message(&body, "Upload failed"),
            "missing column: flowrate"
        );
    }

    #[test]
    fn falls_back_to_details_string() {
        let body = body(r#"{"details": "CSV file is empty"}"#);
        assert_eq!(backend_message(&body, "Upload failed"), "CSV file is empty");
    }

    #[test]
    fn stringifies_structured_details() {
        let body = body(r#"{"details": {"password": ["too short"]}}"#);
        assert_eq!(
            backend_message(&body, "Registration failed"),
            r#"{"password":["too short"]}"#
        );
    }

    #[test]
    fn uses_fallback_when_body_is_empty() {
        let body = body("{}");
        assert_eq!(backend_message(&body, "Upload failed"), "Upload failed");
    }

    #[test]
    fn network_error_displays_generic_message() {
        let error = ApiError::Network("fetch aborted".to_string());
        assert_eq!(
            error.to_string(),
            "Network error. Please check if backend is running."
        );
    }

    #[test]
    fn validation_error_displays_backend_text_verbatim() {
        let error = ApiError::Validation("missing column: flowrate".to_string());
        assert_eq!(error.to_string(), "missing column: flowrate");
    }
}
