use serde::{Deserialize, Serialize};

/// Usuario autenticado; el email es su identidad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Cuerpo de `POST /api/v1/login`, discriminado por `action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    rename_all = "camelCase",
    try_from = "RawLoginResponse"
)]
pub enum LoginResponse {
    /// Sesión ya autenticada
    Done { email: String },
    /// Seguir en el proveedor de identidad
    Redirect { url: String },
    /// El servidor pide credenciales en lugar de redirigir
    ProvideCredentials,
}

/// `done` llega como `{email}` o con el usuario anidado, `{user: {email}}`
#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
enum RawLoginResponse {
    Done {
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        user: Option<User>,
    },
    Redirect {
        url: String,
    },
    ProvideCredentials,
}

impl TryFrom<RawLoginResponse> for LoginResponse {
    type Error = &'static str;

    fn try_from(raw: RawLoginResponse) -> Result<Self, Self::Error> {
        match raw {
            RawLoginResponse::Done { user: Some(user), .. } => Ok(Self::Done { email: user.email }),
            RawLoginResponse::Done { email: Some(email), .. } => Ok(Self::Done { email }),
            RawLoginResponse::Done { .. } => Err("`done` without a user"),
            RawLoginResponse::Redirect { url } => Ok(Self::Redirect { url }),
            RawLoginResponse::ProvideCredentials => Ok(Self::ProvideCredentials),
        }
    }
}

/// Query de `GET /api/v1/login/confirm`, tal como la devuelve el proveedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmLoginQuery {
    pub state: String,
    pub code: String,
}

/// Una candidata devuelta por `POST /api/v1/pet-spotted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetMatch {
    pub name: String,
    pub image_url: String,
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_variants_follow_the_action_tag() {
        let done: LoginResponse =
            serde_json::from_value(json!({ "action": "done", "email": "a@b.com" })).unwrap();
        assert_eq!(
            done,
            LoginResponse::Done {
                email: "a@b.com".to_string()
            }
        );

        let redirect: LoginResponse =
            serde_json::from_value(json!({ "action": "redirect", "url": "/sso" })).unwrap();
        assert_eq!(
            redirect,
            LoginResponse::Redirect {
                url: "/sso".to_string()
            }
        );

        let credentials: LoginResponse =
            serde_json::from_value(json!({ "action": "provideCredentials" })).unwrap();
        assert_eq!(credentials, LoginResponse::ProvideCredentials);
    }

    #[test]
    fn done_accepts_the_nested_user() {
        let done: LoginResponse = serde_json::from_value(json!({
            "action": "done",
            "user": { "email": "a@b.com" }
        }))
        .unwrap();

        assert_eq!(
            done,
            LoginResponse::Done {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn done_serializes_flat() {
        let value = serde_json::to_value(LoginResponse::Done {
            email: "a@b.com".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({ "action": "done", "email": "a@b.com" }));
    }

    #[test]
    fn unknown_actions_are_rejected() {
        let parsed = serde_json::from_value::<LoginResponse>(json!({ "action": "maybe" }));
        assert!(parsed.is_err());

        let parsed = serde_json::from_value::<LoginResponse>(json!({ "action": "done" }));
        assert!(parsed.is_err(), "done without email must not parse");
    }
}
