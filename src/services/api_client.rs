// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// El token se lee del session service y viaja como `Authorization: Token ...`
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::FormData;

use crate::models::{
    AuthResponse, DistributionEntry, DistributionResponse, HistoryEntry, HistoryResponse,
    LoginRequest, RegisterRequest, Summary, UploadResponse,
};
use crate::services::api_error::{backend_message, ApiError, ErrorBody};
use crate::services::session_service;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login con usuario y contraseña
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/login/", self.base_url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión para usuario: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = read_error_body(&response).await;
            return Err(ApiError::Auth(backend_message(&body, "Login failed")));
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| parse_error(&response, e))
    }

    /// Registro de un usuario nuevo. Un 201 trae token + user y
    /// deja al usuario logueado directamente.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/register/", self.base_url);

        log::info!("📝 Registrando usuario: {}", request.username);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = read_error_body(&response).await;
            return Err(ApiError::Auth(backend_message(&body, "Registration failed")));
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| parse_error(&response, e))
    }

    /// Invalida el token en el servidor. Best-effort: quien llama debe
    /// limpiar la sesión local aunque esto falle.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = format!("{}/auth/logout/", self.base_url);

        let response = self
            .authorized(Request::post(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(http_error(&response).await);
        }

        log::info!("👋 Sesión invalidada en el servidor");
        Ok(())
    }

    /// Sube un CSV como multipart (campo `file`). El backend valida el
    /// contenido y recalcula las estadísticas.
    pub async fn upload_csv(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let url = format!("{}/upload/", self.base_url);

        log::info!("📤 Subiendo CSV: {}", file.name());

        let form = FormData::new()
            .map_err(|_| ApiError::Network("No se pudo crear el FormData".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("No se pudo adjuntar el archivo".to_string()))?;

        let response = self
            .authorized(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = read_error_body(&response).await;
            return Err(ApiError::Validation(backend_message(&body, "Upload failed")));
        }

        let upload = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| parse_error(&response, e))?;

        log::info!("✅ CSV procesado por el backend");
        Ok(upload)
    }

    /// Estadísticas del último dataset. 404 = todavía no hay dataset.
    pub async fn get_summary(&self) -> Result<Summary, ApiError> {
        let url = format!("{}/summary/", self.base_url);

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            return Err(http_error(&response).await);
        }

        response
            .json::<Summary>()
            .await
            .map_err(|e| parse_error(&response, e))
    }

    /// Distribución por tipo de equipo, en el orden que decide el backend.
    pub async fn get_distribution(&self) -> Result<Vec<DistributionEntry>, ApiError> {
        let url = format!("{}/distribution/", self.base_url);

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            return Err(http_error(&response).await);
        }

        let distribution = response
            .json::<DistributionResponse>()
            .await
            .map_err(|e| parse_error(&response, e))?;

        Ok(distribution.distribution)
    }

    /// Últimas subidas (el backend ya limita a 5, más recientes primero).
    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = format!("{}/history/", self.base_url);

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            return Err(http_error(&response).await);
        }

        let history = response
            .json::<HistoryResponse>()
            .await
            .map_err(|e| parse_error(&response, e))?;

        Ok(history.history)
    }

    /// Descarga el reporte PDF del último dataset.
    pub async fn download_report(&self) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/report/pdf/", self.base_url);

        log::info!("📄 Descargando reporte PDF...");

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            return Err(http_error(&response).await);
        }

        response
            .binary()
            .await
            .map_err(|e| parse_error(&response, e))
    }

    /// Adjunta el header de autorización si hay sesión guardada.
    /// Sin token no hay header: el servidor responderá 401/403.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match session_service::token() {
            Some(token) => request.header("Authorization", &format!("Token {}", token)),
            None => request,
        }
    }
}

async fn read_error_body(response: &Response) -> ErrorBody {
    response.json::<ErrorBody>().await.unwrap_or_default()
}

async fn http_error(response: &Response) -> ApiError {
    let body = read_error_body(response).await;
    ApiError::Http {
        status: response.status(),
        message: backend_message(&body, &response.status_text()),
    }
}

fn parse_error(response: &Response, error: gloo_net::Error) -> ApiError {
    ApiError::Http {
        status: response.status(),
        message: format!("Parse error: {}", error),
    }
}
