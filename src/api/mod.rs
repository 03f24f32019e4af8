//! # Módulo API
//!
//! Todo lo que habla con el servicio REST de reservas.
//!
//! ## Módulos principales
//!
//! - [`models`] - Registros de cable (canchas, pagos, reservas)
//! - [`client`] - Trait [`ReservasApi`] y cliente reqwest [`ClienteHttp`]
//! - [`errors`] - Taxonomía de errores del cliente

pub mod client;
pub mod errors;
pub mod models;

// Re-exportar tipos comunes para facilitar su uso
pub use client::{ClienteHttp, ReservasApi};
pub use errors::{ApiError, ApiResult};
pub use models::{Cancha, NuevaReserva, Pago, Reserva};
