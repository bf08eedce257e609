use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult};
use mejora_types::*;

/// Fallback shown when an error body carries no usable `detail`.
const ERROR_GENERICO: &str = "Error al procesar la solicitud";

/// API client for the solicitudes intake service
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at the solicitudes resource
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Helper to handle API responses
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);

            match status.as_u16() {
                404 => Err(ApiError::NotFound(detail)),
                400 | 422 => Err(ApiError::BadRequest(detail)),
                _ => Err(ApiError::Api(detail)),
            }
        }
    }

    /// Create a new solicitud
    pub async fn crear_solicitud(&self, nueva: &SolicitudNueva) -> ApiResult<Solicitud> {
        let url = format!("{}/", self.base_url);
        let response = self.client.post(&url).json(nueva).send().await?;
        self.handle_response(response).await
    }

    /// List solicitudes, optionally constrained by area and estado
    pub async fn listar_solicitudes(
        &self,
        area: Option<Area>,
        estado: Option<Estado>,
    ) -> ApiResult<Vec<SolicitudResumen>> {
        let mut url = format!("{}/", self.base_url);
        let mut params = vec![];

        if let Some(a) = area {
            params.push(format!("area={}", urlencoding::encode(a.as_str())));
        }
        if let Some(e) = estado {
            params.push(format!("estado={}", urlencoding::encode(e.as_str())));
        }

        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Get a single solicitud by id
    pub async fn obtener_solicitud(&self, id: i64) -> ApiResult<Solicitud> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Get the summary counters
    pub async fn resumen_estadisticas(&self) -> ApiResult<ResumenEstadisticas> {
        let url = format!("{}/estadisticas/resumen", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }
}

/// Pull the `detail` message out of an error body, falling back to a
/// generic message for empty or non-JSON bodies (e.g. proxy HTML pages).
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| ERROR_GENERICO.to_string())
}

impl Default for ApiClient {
    fn default() -> Self {
        let base_url = std::env::var("MEJORA_SERVER_URL")
            .unwrap_or_else(|_| crate::config::DEFAULT_SERVER_URL.to_string());
        Self::new(base_url)
    }
}
