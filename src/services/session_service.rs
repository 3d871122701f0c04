// ============================================================================
// SESSION SERVICE - persistencia de la sesión en localStorage
// ============================================================================
// Dos claves (token, username) que sobreviven al reload pero no al logout.
// Sin lógica de expiración: el backend decide si el token sigue valiendo.
// ============================================================================

use crate::models::Session;
use crate::utils::storage::{load_key, remove_key, save_key};
use crate::utils::{TOKEN_KEY, USERNAME_KEY};

pub fn save(session: &Session) -> Result<(), String> {
    save_key(TOKEN_KEY, &session.token)?;
    save_key(USERNAME_KEY, &session.username)?;
    log::info!("💾 Sesión guardada: {}", session.username);
    Ok(())
}

/// Restaura la sesión guardada, si ambas claves están presentes.
pub fn load() -> Option<Session> {
    let token = load_key(TOKEN_KEY)?;
    let username = load_key(USERNAME_KEY)?;
    Some(Session { token, username })
}

/// Borra ambas claves. Best-effort: si una falla se intenta igual la otra.
pub fn clear() {
    if let Err(e) = remove_key(TOKEN_KEY) {
        log::warn!("⚠️ No se pudo borrar el token: {}", e);
    }
    if let Err(e) = remove_key(USERNAME_KEY) {
        log::warn!("⚠️ No se pudo borrar el username: {}", e);
    }
    log::info!("🗑️ Sesión local eliminada");
}

/// Token actual, si hay sesión.
pub fn token() -> Option<String> {
    load_key(TOKEN_KEY)
}
