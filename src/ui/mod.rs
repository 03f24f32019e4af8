//! # Módulo de interfaz
//!
//! La capa de presentación, separada de los flujos:
//!
//! - [`view`] - Trait [`Vista`] con los accesores de cada control
//! - [`render`] - Funciones puras registro → modelo de vista
//! - [`consola`] - Implementación de la vista para la terminal

pub mod consola;
pub mod render;
pub mod view;

pub use consola::VistaConsola;
pub use render::{fila_reserva, FilaReserva, FILTRO_TODAS};
pub use view::{DatosFormulario, EstadoTabla, Mensaje, Opcion, TipoMensaje, Vista};
