use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Error del servidor: {0}")]
    Api(String),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No encontrado: {0}")]
    NotFound(String),

    #[error("Solicitud inválida: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// Message suitable for a toast. Detail-bearing variants already
    /// carry the server's `detail` text (or the generic fallback).
    pub fn mensaje(&self) -> String {
        match self {
            ApiError::Network(_) => "Error de conexión con el servidor".to_string(),
            ApiError::Serialization(_) => {
                "Error al procesar la respuesta del servidor".to_string()
            }
            ApiError::Api(detail) | ApiError::NotFound(detail) | ApiError::BadRequest(detail) => {
                detail.clone()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
