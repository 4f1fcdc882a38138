//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto; un valor presente pero
//! inválido es un error de configuración.

use std::env;

use crate::utils::errors::AppError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde cualquier fuente clave/valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a valid number, got '{}'", value)))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("LOG_LEVEL is not a valid level: '{}'", value)))?,
            None => defaults.log_level,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            log_level,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
