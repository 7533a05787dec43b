// ============================================================================
// API CLIENT - Solo HTTP (sin estado), sin lógica de negocio
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{FeatureCollection, LoginResponse, PetMatch, User};

pub const API_PREFIX: &str = "/api/v1";

/// Operaciones del backend que usan los stores
#[async_trait(?Send)]
pub trait LostPawApi {
    /// `POST /login`
    async fn login(&self) -> Result<LoginResponse, AppError>;

    /// `GET /login/confirm?state&code`
    async fn confirm_login(&self, state: &str, code: &str) -> Result<User, AppError>;

    /// `GET /pets`
    async fn fetch_pets(&self) -> Result<FeatureCollection, AppError>;

    /// `POST /pet-spotted?lat&lon` con la foto como cuerpo
    async fn report_sighting(
        &self,
        lat: f64,
        lon: f64,
        image: Vec<u8>,
    ) -> Result<Vec<PetMatch>, AppError>;
}

/// Une la URL base del backend y una ruta de la API
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        API_PREFIX,
        path.trim_start_matches('/')
    )
}

/// URL absoluta de un recurso publicado como ruta (`/api/v1/pets/rex.jpg`)
pub fn asset_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Cliente de navegador sobre `gloo-net`; envía la cookie de sesión
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, AppError> {
        let request =
            request.map_err(|e| AppError::Network(format!("request build error: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => response.status_text(),
            };
            return Err(AppError::Http { status, message });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    fn with_session(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl LostPawApi for ApiClient {
    async fn login(&self) -> Result<LoginResponse, AppError> {
        let url = self.url("login");
        log::info!("🔐 Solicitando login en {}", url);

        let response = Self::send(Self::with_session(Request::post(&url)).build()).await?;
        Self::json(response).await
    }

    async fn confirm_login(&self, state: &str, code: &str) -> Result<User, AppError> {
        let url = self.url("login/confirm");
        log::info!("🔐 Confirmando login");

        let request = Self::with_session(Request::get(&url))
            .query([("state", state), ("code", code)])
            .build();
        let response = Self::send(request).await?;
        Self::json(response).await
    }

    async fn fetch_pets(&self) -> Result<FeatureCollection, AppError> {
        let url = self.url("pets");
        log::info!("🐾 Obteniendo mascotas de {}", url);

        let response = Self::send(Self::with_session(Request::get(&url)).build()).await?;
        Self::json(response).await
    }

    async fn report_sighting(
        &self,
        lat: f64,
        lon: f64,
        image: Vec<u8>,
    ) -> Result<Vec<PetMatch>, AppError> {
        let url = self.url("pet-spotted");
        log::info!("📷 Avistamiento en ({}, {}), {} bytes", lat, lon, image.len());

        let body = js_sys::Uint8Array::from(image.as_slice());
        let request = Self::with_session(Request::post(&url))
            .query([("lat", lat.to_string()), ("lon", lon.to_string())])
            .header("Content-Type", "application/octet-stream")
            .body(body);
        let response = Self::send(request).await?;
        Self::json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_prefix_and_path() {
        assert_eq!(
            endpoint("http://127.0.0.1:3000/", "/login"),
            "http://127.0.0.1:3000/api/v1/login"
        );
        assert_eq!(endpoint("", "pets"), "/api/v1/pets");
    }

    #[test]
    fn asset_paths_are_served_by_the_backend() {
        assert_eq!(
            asset_url("http://127.0.0.1:3000/", "/api/v1/pets/rex.jpg"),
            "http://127.0.0.1:3000/api/v1/pets/rex.jpg"
        );
        assert_eq!(asset_url("", "/api/v1/pets/rex.jpg"), "/api/v1/pets/rex.jpg");
        assert_eq!(
            asset_url("http://127.0.0.1:3000", "https://cdn.example/rex.jpg"),
            "https://cdn.example/rex.jpg"
        );
    }
}
