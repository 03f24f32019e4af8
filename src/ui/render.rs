//! # Construcción pura de modelos de vista
//!
//! Funciones sin efectos que transforman los registros del API en lo que la
//! vista muestra: opciones de los selects, filas de la tabla y la fecha
//! mínima del formulario. Al no tocar ningún control son verificables por
//! comparación directa.

use chrono::NaiveDate;

use crate::api::models::{Cancha, Pago, Reserva};
use crate::ui::view::Opcion;

/// Valor reservado del filtro que significa "sin filtro de cancha"
pub const FILTRO_TODAS: &str = "todas";

/// Etiqueta del marcador del select de canchas
pub const MARCADOR_CANCHA: &str = "Seleccioná una opción";

/// Etiqueta del marcador del select de métodos de pago
pub const MARCADOR_PAGO: &str = "Seleccioná";

/// Una fila de la tabla de reservas, lista para renderizar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilaReserva {
    /// ID de la reserva, con el que se parametriza la acción de eliminar
    pub id: i32,
    pub cancha: String,
    pub fecha: String,
    pub hora: String,
    /// Duración ya formateada ("90 min")
    pub duracion: String,
    pub cliente: String,
}

/// Opciones del select de canchas del formulario: marcador + una por cancha
///
/// La etiqueta incluye la capacidad: `"Cancha 1 (8 pers.)"`.
pub fn opciones_select_canchas(canchas: &[Cancha]) -> Vec<Opcion> {
    let mut opciones = vec![Opcion::new("", MARCADOR_CANCHA)];
    opciones.extend(canchas.iter().map(|cancha| {
        Opcion::new(
            cancha.id.to_string(),
            format!("{} ({} pers.)", cancha.nombre, cancha.capacidad),
        )
    }));
    opciones
}

/// Opciones del select de métodos de pago: marcador + una por método
pub fn opciones_select_pagos(pagos: &[Pago]) -> Vec<Opcion> {
    let mut opciones = vec![Opcion::new("", MARCADOR_PAGO)];
    opciones.extend(
        pagos
            .iter()
            .map(|pago| Opcion::new(pago.id.to_string(), pago.metodo.clone())),
    );
    opciones
}

/// Opciones del filtro de canchas: centinela "Todas" + nombre pelado por cancha
pub fn opciones_filtro_canchas(canchas: &[Cancha]) -> Vec<Opcion> {
    let mut opciones = vec![Opcion::new(FILTRO_TODAS, "Todas")];
    opciones.extend(
        canchas
            .iter()
            .map(|cancha| Opcion::new(cancha.id.to_string(), cancha.nombre.clone())),
    );
    opciones
}

/// Proyecta una reserva del API a su fila de tabla
pub fn fila_reserva(reserva: &Reserva) -> FilaReserva {
    FilaReserva {
        id: reserva.id,
        cancha: reserva.cancha_nombre.clone(),
        fecha: reserva.fecha.clone(),
        hora: reserva.hora.clone(),
        duracion: format!("{} min", reserva.duracion),
        cliente: reserva.usuario_nombre.clone(),
    }
}

/// Formatea una fecha como mínimo del campo de fecha (YYYY-MM-DD, con ceros)
pub fn fecha_minima(dia: NaiveDate) -> String {
    dia.format("%Y-%m-%d").to_string()
}
