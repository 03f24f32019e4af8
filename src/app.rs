//! # Flujos de la aplicación
//!
//! Este módulo concentra las reglas que mantienen la vista sincronizada con
//! el estado del servidor a través de crear, listar, filtrar y eliminar:
//!
//! - Fijar la fecha mínima del formulario (y volver a fijarla tras guardar)
//! - Cargar los datos de referencia (canchas y métodos de pago)
//! - Cargar el listado de reservas, con filtro opcional por cancha
//! - Guardar una reserva nueva, con validación previa al envío
//! - Eliminar una reserva con confirmación y clave de administrador
//! - Alternar el menú de navegación
//!
//! Cada flujo es dueño de sus propios errores: nada se propaga al llamador,
//! todo fallo termina en un mensaje en la vista o en el log. No hay
//! reintentos ni cancelación; acciones rápidas repetidas pueden pisarse
//! entre sí y gana la que renderiza última.

use std::time::Duration;

use chrono::NaiveDate;

use crate::api::{ApiError, ReservasApi};
use crate::ui::render::{self, FILTRO_TODAS};
use crate::ui::view::{EstadoTabla, Mensaje, Vista};

/// Tiempo que el mensaje de éxito queda visible antes de retirarse
pub const MENSAJE_VISIBLE: Duration = Duration::from_millis(4000);

/// Fuente de la fecha de hoy, inyectable para tests deterministas
pub trait Reloj: Send + Sync {
    fn hoy(&self) -> NaiveDate;
}

/// Reloj de producción: la fecha local del sistema
pub struct RelojSistema;

impl Reloj for RelojSistema {
    fn hoy(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Parsea el valor de un select como id positivo
///
/// Un valor vacío, no numérico o no positivo cuenta como "sin selección".
fn id_positivo(valor: &str) -> Option<i32> {
    valor.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Controlador de los flujos, genérico sobre el API y la vista
pub struct App<A, V> {
    api: A,
    vista: V,
    reloj: Box<dyn Reloj>,
}

impl<A, V> App<A, V>
where
    A: ReservasApi,
    V: Vista,
{
    /// Crea la aplicación con el reloj del sistema
    pub fn new(api: A, vista: V) -> Self {
        Self::con_reloj(api, vista, Box::new(RelojSistema))
    }

    /// Crea la aplicación con un reloj inyectado
    pub fn con_reloj(api: A, vista: V, reloj: Box<dyn Reloj>) -> Self {
        Self { api, vista, reloj }
    }

    /// Acceso de solo lectura a la vista (inspección en tests)
    pub fn vista(&self) -> &V {
        &self.vista
    }

    /// Acceso mutable a la vista (la interacción directa del usuario con
    /// los controles, como cambiar el filtro, pasa por acá)
    pub fn vista_mut(&mut self) -> &mut V {
        &mut self.vista
    }

    /// Fija la fecha mínima del campo de fecha en el día de hoy
    ///
    /// Se invoca al arrancar y de nuevo tras cada alta exitosa, porque el
    /// reinicio del formulario no debe levantar la restricción.
    pub fn fijar_fecha_minima(&mut self) {
        let hoy = self.reloj.hoy();
        self.vista.fijar_fecha_minima(&render::fecha_minima(hoy));
    }

    /// Carga canchas y métodos de pago en los tres selects
    ///
    /// Tres secuencias de fetch aisladas: que falle una no frena a las
    /// otras. Ante un fallo, el control afectado queda como estaba y el
    /// error va al log. El filtro conserva la selección previa del usuario
    /// y cae al centinela `"todas"` si esa cancha ya no existe.
    pub async fn cargar_datos_referencia(&mut self) {
        match self.api.listar_canchas().await {
            Ok(canchas) => {
                self.vista
                    .poblar_select_canchas(render::opciones_select_canchas(&canchas));
            }
            Err(error) => {
                tracing::error!(error = %error, "Error cargando canchas");
            }
        }

        match self.api.listar_pagos().await {
            Ok(pagos) => {
                self.vista
                    .poblar_select_pagos(render::opciones_select_pagos(&pagos));
            }
            Err(error) => {
                tracing::error!(error = %error, "Error cargando pagos");
            }
        }

        let previo = self.vista.filtro_actual();
        match self.api.listar_canchas().await {
            Ok(canchas) => {
                self.vista
                    .poblar_filtro_canchas(render::opciones_filtro_canchas(&canchas));
                let previo = previo
                    .filter(|valor| !valor.is_empty())
                    .unwrap_or_else(|| FILTRO_TODAS.to_string());
                if !self.vista.seleccionar_filtro(&previo) {
                    self.vista.seleccionar_filtro(FILTRO_TODAS);
                }
            }
            Err(error) => {
                tracing::error!(error = %error, "Error cargando filtro de canchas");
            }
        }
    }

    /// Carga el listado de reservas y reemplaza la tabla completa
    ///
    /// El filtro activo se lee de la vista; vacío o `"todas"` significa sin
    /// filtro. La tabla pasa por `Cargando` y termina en exactamente uno de
    /// `Vacia`, `Filas` o `Error`.
    pub async fn cargar_reservas(&mut self) {
        let filtro = self
            .vista
            .filtro_actual()
            .filter(|valor| !valor.is_empty() && valor != FILTRO_TODAS)
            .and_then(|valor| valor.parse::<i32>().ok());

        self.vista.mostrar_tabla(EstadoTabla::Cargando);

        match self.api.listar_reservas(filtro).await {
            Ok(reservas) if reservas.is_empty() => {
                self.vista.mostrar_tabla(EstadoTabla::Vacia);
            }
            Ok(reservas) => {
                let filas = reservas.iter().map(render::fila_reserva).collect();
                self.vista.mostrar_tabla(EstadoTabla::Filas(filas));
            }
            Err(error) => {
                tracing::error!(error = %error, "Error cargando reservas");
                self.vista.mostrar_tabla(EstadoTabla::Error);
            }
        }
    }

    /// Guarda la reserva armada con los campos actuales del formulario
    ///
    /// # Validaciones
    ///
    /// Estrictamente antes de cualquier request y en este orden:
    ///
    /// 1. `cancha` debe parsear a un id positivo
    /// 2. `pago` debe parsear a un id positivo
    ///
    /// El resto de los campos viaja tal cual: el servidor es la autoridad
    /// para esas restricciones.
    ///
    /// # Resultado
    ///
    /// - 2xx: mensaje de éxito (se retira solo a los 4 segundos), reinicio
    ///   del formulario, fecha mínima de nuevo en hoy y una recarga del
    ///   listado
    /// - Rechazo: se muestra el `detail` del servidor, o un texto genérico
    /// - Fallo de transporte: mensaje genérico de conectividad, al log el
    ///   detalle
    pub async fn guardar_reserva(&mut self) {
        let datos = self.vista.leer_formulario();

        let cancha_id = match id_positivo(&datos.cancha) {
            Some(id) => id,
            None => {
                self.vista
                    .mostrar_mensaje(Mensaje::error("❌ Seleccioná una cancha válida."));
                return;
            }
        };

        let pago_id = match id_positivo(&datos.pago) {
            Some(id) => id,
            None => {
                self.vista.mostrar_mensaje(Mensaje::error(
                    "❌ Seleccioná un método de pago válido.",
                ));
                return;
            }
        };

        let nueva = crate::api::NuevaReserva {
            nombre: datos.nombre.trim().to_string(),
            email: datos.email.trim().to_string(),
            cancha_id,
            fecha: datos.fecha,
            hora: datos.hora,
            duracion: datos.duracion.trim().parse().ok(),
            jugadores: datos.jugadores.trim().parse().ok(),
            pago_id,
        };

        match self.api.crear_reserva(&nueva).await {
            Ok(creada) => {
                tracing::info!(id = creada.id, "Reserva registrada");
                self.vista.mostrar_mensaje_temporal(
                    Mensaje::ok("✅ Reserva registrada correctamente."),
                    MENSAJE_VISIBLE,
                );
                self.vista.reiniciar_formulario();
                self.fijar_fecha_minima();
                self.cargar_reservas().await;
            }
            Err(ApiError::Rechazo { detail, .. }) => {
                let detalle =
                    detail.unwrap_or_else(|| "Error al registrar la reserva.".to_string());
                self.vista
                    .mostrar_mensaje(Mensaje::error(format!("❌ {}", detalle)));
            }
            Err(error) => {
                tracing::error!(error = %error, "Error guardando reserva");
                self.vista
                    .mostrar_mensaje(Mensaje::error("⚠ No se pudo conectar con el servidor."));
            }
        }
    }

    /// Elimina una reserva previa confirmación y clave de administrador
    ///
    /// # Pasos
    ///
    /// 1. Confirmación explícita; si se declina, no pasa nada más
    /// 2. Clave de administrador; vacía o cancelada aborta con el aviso
    ///    "Acción cancelada." y sin emitir ningún request
    /// 3. DELETE con la clave en el header; el cliente nunca la valida
    /// 4. Aviso de éxito, del `detail` del servidor, o de conectividad
    /// 5. Tras cualquier request emitido (con éxito o no) se recarga el
    ///    listado; los dos abortos tempranos no recargan
    pub async fn eliminar_reserva(&mut self, id: i32) {
        if !self.vista.confirmar("¿Eliminar esta reserva?") {
            return;
        }

        let clave = match self
            .vista
            .pedir_clave("Ingrese la contraseña de administrador para eliminar:")
        {
            Some(clave) if !clave.is_empty() => clave,
            _ => {
                self.vista.avisar("Acción cancelada.");
                return;
            }
        };

        match self.api.eliminar_reserva(id, &clave).await {
            Ok(()) => {
                tracing::info!(id, "Reserva eliminada");
                self.vista.avisar("✅ Reserva eliminada correctamente.");
            }
            Err(ApiError::Rechazo { detail, .. }) => {
                let detalle =
                    detail.unwrap_or_else(|| "Error al eliminar la reserva.".to_string());
                self.vista.avisar(&format!("❌ {}", detalle));
            }
            Err(error) => {
                tracing::error!(error = %error, "Error eliminando reserva");
                self.vista.avisar("⚠ No se pudo conectar al servidor.");
            }
        }

        self.cargar_reservas().await;
    }

    /// Alterna la visibilidad del panel de navegación
    pub fn alternar_menu(&mut self) {
        self.vista.alternar_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_positivo_acepta_solo_enteros_mayores_a_cero() {
        assert_eq!(id_positivo("3"), Some(3));
        assert_eq!(id_positivo(" 12 "), Some(12));
        assert_eq!(id_positivo(""), None);
        assert_eq!(id_positivo("0"), None);
        assert_eq!(id_positivo("-2"), None);
        assert_eq!(id_positivo("abc"), None);
        assert_eq!(id_positivo("3abc"), None);
    }
}
