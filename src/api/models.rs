//! # Modelos del API de reservas
//!
//! Registros tal como viajan por el cable entre el cliente y el servicio
//! REST. El cliente no mantiene estado propio más allá de estos valores
//! transitorios: todo se vuelve a pedir al servidor en cada operación.

use serde::{Deserialize, Serialize};

/// Cancha deportiva reservable
///
/// El servidor puede devolver campos adicionales (tipo, sucursal); el
/// cliente solo usa estos tres y descarta el resto al deserializar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancha {
    /// ID único de la cancha
    pub id: i32,
    /// Nombre visible ("Cancha 3")
    pub nombre: String,
    /// Capacidad máxima de personas
    pub capacidad: i32,
}

/// Método de pago disponible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    /// ID único del método
    pub id: i32,
    /// Nombre del método ("Efectivo", "Transferencia", ...)
    pub metodo: String,
}

/// Payload para crear una nueva reserva
///
/// `duracion` y `jugadores` son `Option` a propósito: si el usuario escribe
/// algo no numérico se envía `null` y es el servidor quien rechaza la
/// reserva. El cliente solo valida `cancha_id` y `pago_id` antes de enviar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevaReserva {
    /// Nombre completo del cliente
    pub nombre: String,
    /// Email del cliente
    pub email: String,
    /// ID de la cancha elegida (debe existir en el servidor)
    pub cancha_id: i32,
    /// Fecha de la reserva (formato YYYY-MM-DD)
    pub fecha: String,
    /// Hora de la reserva (formato HH:MM)
    pub hora: String,
    /// Duración en minutos
    pub duracion: Option<i32>,
    /// Cantidad de jugadores
    pub jugadores: Option<i32>,
    /// ID del método de pago elegido (debe existir en el servidor)
    pub pago_id: i32,
}

/// Reserva tal como la devuelve el servidor para el listado
///
/// Proyección desnormalizada: el join cancha/usuario lo hace el servidor,
/// el cliente nunca lo reconstruye localmente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    /// ID único de la reserva
    pub id: i32,
    /// Nombre de la cancha reservada
    pub cancha_nombre: String,
    /// Fecha de la reserva (YYYY-MM-DD)
    pub fecha: String,
    /// Hora de la reserva (HH:MM)
    pub hora: String,
    /// Duración en minutos
    pub duracion: i32,
    /// Nombre del cliente que reservó
    pub usuario_nombre: String,
}
