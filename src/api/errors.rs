//! # Manejo de errores del cliente
//!
//! Taxonomía de fallos al hablar con el servicio de reservas. Tres familias:
//!
//! - **Conexión**: el request nunca obtuvo respuesta (red caída, servidor
//!   apagado). Al usuario se le muestra un mensaje genérico de conectividad
//!   y el detalle va al log.
//! - **Decodificación**: hubo respuesta pero el cuerpo no se pudo leer o
//!   parsear. Se trata igual que un fallo de conexión de cara al usuario.
//! - **Rechazo**: el servidor respondió con un estado no-2xx y,
//!   normalmente, un cuerpo `{"detail": "..."}` que se muestra tal cual.
//!
//! Los errores de validación del formulario NO viven acá: se atrapan en la
//! capa de flujos antes de emitir ningún request.

use thiserror::Error;

/// Error de una operación contra el API de reservas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No hubo respuesta del servidor
    #[error("Error de conexión con el servidor: {0}")]
    Conexion(String),

    /// La respuesta llegó pero su cuerpo no se pudo interpretar
    #[error("Respuesta ilegible del servidor: {0}")]
    Decodificacion(String),

    /// El servidor rechazó la operación con un estado no-2xx
    ///
    /// `detail` trae el mensaje estructurado del cuerpo cuando existe;
    /// la capa de flujos decide el texto de reemplazo si falta.
    #[error("El servidor rechazó la operación (HTTP {status}): {}", .detail.as_deref().unwrap_or("sin detalle"))]
    Rechazo {
        status: u16,
        detail: Option<String>,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Crea un rechazo con detalle conocido
    pub fn rechazo(status: u16, detail: &str) -> Self {
        Self::Rechazo {
            status,
            detail: Some(detail.to_string()),
        }
    }

    /// Detalle estructurado del servidor, si la operación fue rechazada
    pub fn detalle(&self) -> Option<&str> {
        match self {
            Self::Rechazo { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Clasifica los errores de reqwest en las dos familias de transporte
impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decodificacion(error.to_string())
        } else {
            Self::Conexion(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rechazo_muestra_el_detalle() {
        let error = ApiError::rechazo(409, "Ya existe una reserva para esa cancha.");
        assert_eq!(error.detalle(), Some("Ya existe una reserva para esa cancha."));
        assert!(error.to_string().contains("HTTP 409"));
        assert!(error.to_string().contains("Ya existe una reserva"));
    }

    #[test]
    fn rechazo_sin_detalle_usa_marcador() {
        let error = ApiError::Rechazo {
            status: 500,
            detail: None,
        };
        assert_eq!(error.detalle(), None);
        assert!(error.to_string().contains("sin detalle"));
    }

    #[test]
    fn conexion_no_tiene_detalle() {
        let error = ApiError::Conexion("connection refused".to_string());
        assert_eq!(error.detalle(), None);
    }
}
