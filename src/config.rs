//! Configuración de la aplicación.

use std::env;

/// URL base por defecto del servicio de reservas
pub const API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// URL base del servicio (`{base}/reservas`, `{base}/canchas`, ...)
    pub api_base: String,
}

impl Config {
    /// Lee la configuración del entorno, con el valor fijo como respaldo
    pub fn from_env() -> Self {
        let api_base = env::var("RESERVAS_API_BASE").unwrap_or_else(|_| API_BASE.to_string());
        Self { api_base }
    }
}
