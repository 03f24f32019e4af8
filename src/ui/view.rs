//! # Enlace con la vista
//!
//! El original manipulaba el árbol del documento con búsquedas sueltas por
//! función; acá todos los controles quedan detrás del trait [`Vista`] con
//! accesores con nombre, inyectado una sola vez. Así los flujos se pueden
//! probar sin terminal ni navegador.

use std::time::Duration;

use crate::ui::render::FilaReserva;

/// Una opción de un control de selección
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcion {
    /// Valor enviable (el id del registro, o vacío para el marcador)
    pub valor: String,
    /// Etiqueta visible
    pub etiqueta: String,
}

impl Opcion {
    pub fn new(valor: impl Into<String>, etiqueta: impl Into<String>) -> Self {
        Self {
            valor: valor.into(),
            etiqueta: etiqueta.into(),
        }
    }
}

/// Campos del formulario de reserva, crudos tal como los dejó el usuario
///
/// La conversión a números y la validación ocurren en la capa de flujos,
/// nunca acá.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatosFormulario {
    pub nombre: String,
    pub email: String,
    /// Valor del select de cancha (id como texto, o vacío)
    pub cancha: String,
    pub fecha: String,
    pub hora: String,
    pub duracion: String,
    pub jugadores: String,
    /// Valor del select de método de pago (id como texto, o vacío)
    pub pago: String,
}

/// Clase visual de un mensaje del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMensaje {
    Ok,
    Error,
}

/// Mensaje corto mostrado junto al formulario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mensaje {
    pub texto: String,
    pub tipo: TipoMensaje,
}

impl Mensaje {
    pub fn ok(texto: impl Into<String>) -> Self {
        Self {
            texto: texto.into(),
            tipo: TipoMensaje::Ok,
        }
    }

    pub fn error(texto: impl Into<String>) -> Self {
        Self {
            texto: texto.into(),
            tipo: TipoMensaje::Error,
        }
    }
}

/// Estados posibles de la tabla de reservas
///
/// La tabla siempre se reemplaza completa: nunca hay filas viejas mezcladas
/// con nuevas, y siempre termina en exactamente uno de estos estados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstadoTabla {
    /// Fila única "Cargando..." mientras el request está en vuelo
    Cargando,
    /// Fila única "No hay reservas."
    Vacia,
    /// Fila única de error cuando el fetch o el parseo fallaron
    Error,
    /// Una fila por reserva, en el orden en que llegaron
    Filas(Vec<FilaReserva>),
}

/// Accesores con nombre para cada control de la página
pub trait Vista {
    // --- formulario de reserva ---

    /// Lee los campos actuales del formulario
    fn leer_formulario(&mut self) -> DatosFormulario;

    /// Vacía todos los campos del formulario
    fn reiniciar_formulario(&mut self);

    /// Fija la fecha mínima seleccionable del campo fecha (YYYY-MM-DD)
    fn fijar_fecha_minima(&mut self, fecha: &str);

    /// Muestra un mensaje junto al formulario
    fn mostrar_mensaje(&mut self, mensaje: Mensaje);

    /// Muestra un mensaje que la vista debe retirar pasado `visible`
    fn mostrar_mensaje_temporal(&mut self, mensaje: Mensaje, visible: Duration);

    // --- controles de selección ---

    /// Reemplaza todas las opciones del select de canchas del formulario
    fn poblar_select_canchas(&mut self, opciones: Vec<Opcion>);

    /// Reemplaza todas las opciones del select de métodos de pago
    fn poblar_select_pagos(&mut self, opciones: Vec<Opcion>);

    /// Reemplaza todas las opciones del filtro de canchas del listado
    fn poblar_filtro_canchas(&mut self, opciones: Vec<Opcion>);

    /// Valor actualmente elegido en el filtro de canchas
    fn filtro_actual(&self) -> Option<String>;

    /// Intenta seleccionar `valor` en el filtro; `false` si ya no existe
    fn seleccionar_filtro(&mut self, valor: &str) -> bool;

    // --- tabla de reservas ---

    /// Reemplaza el contenido completo de la tabla
    fn mostrar_tabla(&mut self, estado: EstadoTabla);

    // --- diálogos ---

    /// Pide confirmación explícita; `false` equivale a cancelar
    fn confirmar(&mut self, pregunta: &str) -> bool;

    /// Pide la clave de administrador; `None` si se canceló o quedó vacía
    fn pedir_clave(&mut self, mensaje: &str) -> Option<String>;

    /// Aviso modal (el `alert` del original)
    fn avisar(&mut self, texto: &str);

    // --- navegación ---

    /// Alterna la visibilidad del panel de navegación
    fn alternar_menu(&mut self);
}
