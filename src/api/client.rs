//! # Cliente HTTP del servicio de reservas
//!
//! Las cinco operaciones REST que usa la aplicación, detrás del trait
//! [`ReservasApi`] para poder simular el servidor en los tests. La
//! implementación real es [`ClienteHttp`] sobre reqwest.
//!
//! Sin timeouts ni reintentos: cada fallo es terminal para ese intento y se
//! informa al usuario en la capa de flujos.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::errors::{ApiError, ApiResult};
use super::models::{Cancha, NuevaReserva, Pago, Reserva};

/// Operaciones del API de reservas
///
/// - `GET /canchas` → [`listar_canchas`](Self::listar_canchas)
/// - `GET /pagos` → [`listar_pagos`](Self::listar_pagos)
/// - `GET /reservas[?cancha_id=N]` → [`listar_reservas`](Self::listar_reservas)
/// - `POST /reservas` → [`crear_reserva`](Self::crear_reserva)
/// - `DELETE /reservas/{id}` → [`eliminar_reserva`](Self::eliminar_reserva)
#[async_trait]
pub trait ReservasApi: Send + Sync {
    /// Lista todas las canchas disponibles
    async fn listar_canchas(&self) -> ApiResult<Vec<Cancha>>;

    /// Lista los métodos de pago disponibles
    async fn listar_pagos(&self) -> ApiResult<Vec<Pago>>;

    /// Lista las reservas, opcionalmente filtradas por cancha
    async fn listar_reservas(&self, cancha_id: Option<i32>) -> ApiResult<Vec<Reserva>>;

    /// Crea una reserva y devuelve el registro creado por el servidor
    async fn crear_reserva(&self, nueva: &NuevaReserva) -> ApiResult<Reserva>;

    /// Elimina una reserva; la clave de administrador viaja en el header
    /// `admin_key` y la valida únicamente el servidor
    async fn eliminar_reserva(&self, id: i32, admin_key: &str) -> ApiResult<()>;
}

/// Cuerpo de error estructurado del servidor
///
/// Si `detail` no es un string (p. ej. la lista de errores de validación
/// que devuelve el servidor en un 422), el parseo falla y se cae al
/// mensaje genérico de la operación.
#[derive(Deserialize)]
struct DetalleRechazo {
    detail: Option<String>,
}

/// Cliente real sobre reqwest
#[derive(Debug, Clone)]
pub struct ClienteHttp {
    http: reqwest::Client,
    base: String,
}

impl ClienteHttp {
    /// Crea el cliente contra una URL base (`http://127.0.0.1:8000`)
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn url_canchas(&self) -> String {
        format!("{}/canchas", self.base)
    }

    fn url_pagos(&self) -> String {
        format!("{}/pagos", self.base)
    }

    fn url_reservas(&self, cancha_id: Option<i32>) -> String {
        match cancha_id {
            Some(id) => format!("{}/reservas?cancha_id={}", self.base, id),
            None => format!("{}/reservas", self.base),
        }
    }

    fn url_reserva(&self, id: i32) -> String {
        format!("{}/reservas/{}", self.base, id)
    }

    /// GET con decodificación JSON del cuerpo
    async fn obtener<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(rechazo(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }
}

/// Convierte una respuesta no-2xx en [`ApiError::Rechazo`]
async fn rechazo(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let detail = resp
        .json::<DetalleRechazo>()
        .await
        .ok()
        .and_then(|cuerpo| cuerpo.detail);
    ApiError::Rechazo { status, detail }
}

#[async_trait]
impl ReservasApi for ClienteHttp {
    async fn listar_canchas(&self) -> ApiResult<Vec<Cancha>> {
        self.obtener(&self.url_canchas()).await
    }

    async fn listar_pagos(&self) -> ApiResult<Vec<Pago>> {
        self.obtener(&self.url_pagos()).await
    }

    async fn listar_reservas(&self, cancha_id: Option<i32>) -> ApiResult<Vec<Reserva>> {
        self.obtener(&self.url_reservas(cancha_id)).await
    }

    async fn crear_reserva(&self, nueva: &NuevaReserva) -> ApiResult<Reserva> {
        let resp = self
            .http
            .post(self.url_reservas(None))
            .json(nueva)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(rechazo(resp).await);
        }
        Ok(resp.json::<Reserva>().await?)
    }

    async fn eliminar_reserva(&self, id: i32, admin_key: &str) -> ApiResult<()> {
        let resp = self
            .http
            .delete(self.url_reserva(id))
            .header("admin_key", admin_key)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(rechazo(resp).await);
        }
        Ok(())
    }
}
