/// URL base del backend (incluye el prefijo /api)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Claves de localStorage para la sesión. Se borran juntas en el logout.
pub const TOKEN_KEY: &str = "equipmentAnalytics_token";
pub const USERNAME_KEY: &str = "equipmentAnalytics_username";
