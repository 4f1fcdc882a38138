//! Extracción del usuario propietario
//!
//! La autenticación queda fuera de este servicio: el gateway que la realiza
//! reenvía el identificador del usuario en la cabecera `x-owner-id`. Todas
//! las consultas se limitan a los datos de ese usuario.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::utils::errors::AppError;

pub const OWNER_HEADER: &str = "x-owner-id";

/// Usuario dueño de los datos de la request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerId(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(format!("Header '{}' requerido", OWNER_HEADER)))?;

        Uuid::parse_str(value.trim())
            .map(OwnerId)
            .map_err(|_| AppError::Unauthorized(format!("Header '{}' inválido", OWNER_HEADER)))
    }
}
