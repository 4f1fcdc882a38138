//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa de aplicación (repositorios,
//! controladores, configuración) y su conversión a respuestas HTTP. El
//! cálculo de consumo y estadísticas no produce errores.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::Unauthorized(msg) => {
                warn!("Unauthorized access: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                }
            }

            AppError::Forbidden(msg) => {
                warn!("Forbidden access: {}", msg);
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: Some("FORBIDDEN".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message: msg,
                    details: None,
                    code: Some("CONFLICT".to_string()),
                }
            }

            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                }
            }

            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                ErrorResponse {
                    error: "Configuration Error".to_string(),
                    message: "The server is misconfigured".to_string(),
                    details: None,
                    code: Some("CONFIG_ERROR".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str, reason: &str) -> AppError {
    AppError::Forbidden(format!("Cannot {}: {}", operation, reason))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
