use serde::{Deserialize, Serialize};

/// Sesión autenticada del usuario actual.
/// El backend es la fuente de verdad sobre la validez del token;
/// el cliente nunca comprueba su frescura.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub username: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Respuesta de /auth/login/ y /auth/register/
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: ApiUser,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            username: self.user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_deserializes_backend_payload() {
        let json = r#"{
            "message": "Login successful",
            "user": {"id": 3, "username": "asha", "email": "asha@example.com"},
            "token": "abc123"
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session();
        assert_eq!(session.token, "abc123");
        assert_eq!(session.username, "asha");
    }

    #[test]
    fn auth_response_tolerates_missing_optional_fields() {
        let json = r#"{"user": {"username": "asha"}, "token": "abc123"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.message.is_none());
        assert!(response.user.email.is_none());
    }
}
