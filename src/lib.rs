//! # Cliente de reservas de canchas
//!
//! Cliente del servicio REST de reservas deportivas: carga los datos de
//! referencia (canchas y métodos de pago), lista reservas con filtro
//! opcional por cancha, da de alta reservas nuevas y elimina reservas con
//! clave de administrador.
//!
//! ## Arquitectura
//!
//! ```text
//! Vista (terminal, o simulada en tests)
//!     ↕ trait Vista
//! Flujos (app) — validación, sincronización, mensajes
//!     ↕ trait ReservasApi
//! Cliente HTTP (reqwest) — GET/POST/DELETE JSON
//! ```
//!
//! Los flujos de [`app`] son los mismos seis del original: fecha mínima,
//! datos de referencia, listado, alta, baja y menú. Toda mutación termina
//! recargando el listado completo desde el servidor; el cliente no guarda
//! estado propio entre operaciones.

pub mod api;
pub mod app;
pub mod config;
pub mod ui;
