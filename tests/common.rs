//! Dobles de prueba compartidos: API simulada con registro de llamadas,
//! vista simulada con registro de renders y un reloj fijo.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use canchas_client::api::{
    ApiResult, Cancha, NuevaReserva, Pago, Reserva, ReservasApi,
};
use canchas_client::app::Reloj;
use canchas_client::ui::view::{DatosFormulario, EstadoTabla, Mensaje, Opcion, Vista};

/// Una llamada registrada contra el API simulado
#[derive(Debug, Clone, PartialEq)]
pub enum Llamada {
    Canchas,
    Pagos,
    Reservas(Option<i32>),
    Crear(NuevaReserva),
    Eliminar(i32, String),
}

/// API simulado: respuestas enlatadas y registro de cada llamada
pub struct ApiSimulada {
    pub llamadas: Arc<Mutex<Vec<Llamada>>>,
    pub canchas: ApiResult<Vec<Cancha>>,
    pub pagos: ApiResult<Vec<Pago>>,
    pub reservas: ApiResult<Vec<Reserva>>,
    pub crear: ApiResult<Reserva>,
    pub eliminar: ApiResult<()>,
}

impl Default for ApiSimulada {
    fn default() -> Self {
        Self {
            llamadas: Arc::new(Mutex::new(Vec::new())),
            canchas: Ok(canchas_de_muestra()),
            pagos: Ok(pagos_de_muestra()),
            reservas: Ok(reservas_de_muestra()),
            crear: Ok(reserva_de_muestra(1)),
            eliminar: Ok(()),
        }
    }
}

impl ApiSimulada {
    /// Copia del registro de llamadas hasta el momento
    pub fn registro(llamadas: &Arc<Mutex<Vec<Llamada>>>) -> Vec<Llamada> {
        llamadas.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservasApi for ApiSimulada {
    async fn listar_canchas(&self) -> ApiResult<Vec<Cancha>> {
        self.llamadas.lock().unwrap().push(Llamada::Canchas);
        self.canchas.clone()
    }

    async fn listar_pagos(&self) -> ApiResult<Vec<Pago>> {
        self.llamadas.lock().unwrap().push(Llamada::Pagos);
        self.pagos.clone()
    }

    async fn listar_reservas(&self, cancha_id: Option<i32>) -> ApiResult<Vec<Reserva>> {
        self.llamadas
            .lock()
            .unwrap()
            .push(Llamada::Reservas(cancha_id));
        self.reservas.clone()
    }

    async fn crear_reserva(&self, nueva: &NuevaReserva) -> ApiResult<Reserva> {
        self.llamadas
            .lock()
            .unwrap()
            .push(Llamada::Crear(nueva.clone()));
        self.crear.clone()
    }

    async fn eliminar_reserva(&self, id: i32, admin_key: &str) -> ApiResult<()> {
        self.llamadas
            .lock()
            .unwrap()
            .push(Llamada::Eliminar(id, admin_key.to_string()));
        self.eliminar.clone()
    }
}

/// Vista simulada: guarda todo lo que los flujos le piden renderizar
#[derive(Default)]
pub struct VistaSimulada {
    /// Campos que devolverá `leer_formulario`
    pub formulario: DatosFormulario,
    pub reinicios: usize,
    pub fechas_minimas: Vec<String>,
    pub mensajes: Vec<Mensaje>,
    pub mensajes_temporales: Vec<(Mensaje, Duration)>,
    pub selects_canchas: Vec<Vec<Opcion>>,
    pub selects_pagos: Vec<Vec<Opcion>>,
    pub filtros_poblados: Vec<Vec<Opcion>>,
    /// Valor actualmente elegido en el filtro
    pub filtro: Option<String>,
    /// Opciones presentes en el filtro (las acepta `seleccionar_filtro`)
    pub opciones_filtro: Vec<Opcion>,
    pub tablas: Vec<EstadoTabla>,
    pub respuesta_confirmar: bool,
    pub respuesta_clave: Option<String>,
    pub confirmaciones: Vec<String>,
    pub pedidos_clave: Vec<String>,
    pub avisos: Vec<String>,
    pub menu_alternado: usize,
}

impl Vista for VistaSimulada {
    fn leer_formulario(&mut self) -> DatosFormulario {
        self.formulario.clone()
    }

    fn reiniciar_formulario(&mut self) {
        self.reinicios += 1;
        self.formulario = DatosFormulario::default();
    }

    fn fijar_fecha_minima(&mut self, fecha: &str) {
        self.fechas_minimas.push(fecha.to_string());
    }

    fn mostrar_mensaje(&mut self, mensaje: Mensaje) {
        self.mensajes.push(mensaje);
    }

    fn mostrar_mensaje_temporal(&mut self, mensaje: Mensaje, visible: Duration) {
        self.mensajes_temporales.push((mensaje, visible));
    }

    fn poblar_select_canchas(&mut self, opciones: Vec<Opcion>) {
        self.selects_canchas.push(opciones);
    }

    fn poblar_select_pagos(&mut self, opciones: Vec<Opcion>) {
        self.selects_pagos.push(opciones);
    }

    fn poblar_filtro_canchas(&mut self, opciones: Vec<Opcion>) {
        self.opciones_filtro = opciones.clone();
        self.filtros_poblados.push(opciones);
    }

    fn filtro_actual(&self) -> Option<String> {
        self.filtro.clone()
    }

    fn seleccionar_filtro(&mut self, valor: &str) -> bool {
        if self.opciones_filtro.iter().any(|o| o.valor == valor) {
            self.filtro = Some(valor.to_string());
            true
        } else {
            false
        }
    }

    fn mostrar_tabla(&mut self, estado: EstadoTabla) {
        self.tablas.push(estado);
    }

    fn confirmar(&mut self, pregunta: &str) -> bool {
        self.confirmaciones.push(pregunta.to_string());
        self.respuesta_confirmar
    }

    fn pedir_clave(&mut self, mensaje: &str) -> Option<String> {
        self.pedidos_clave.push(mensaje.to_string());
        self.respuesta_clave.clone()
    }

    fn avisar(&mut self, texto: &str) {
        self.avisos.push(texto.to_string());
    }

    fn alternar_menu(&mut self) {
        self.menu_alternado += 1;
    }
}

/// Reloj que siempre devuelve el mismo día
pub struct RelojFijo(pub NaiveDate);

impl Reloj for RelojFijo {
    fn hoy(&self) -> NaiveDate {
        self.0
    }
}

pub fn dia_de_prueba() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
}

pub fn canchas_de_muestra() -> Vec<Cancha> {
    vec![
        Cancha {
            id: 1,
            nombre: "Cancha 1".to_string(),
            capacidad: 8,
        },
        Cancha {
            id: 2,
            nombre: "Cancha 2".to_string(),
            capacidad: 11,
        },
    ]
}

pub fn pagos_de_muestra() -> Vec<Pago> {
    vec![
        Pago {
            id: 1,
            metodo: "Efectivo".to_string(),
        },
        Pago {
            id: 2,
            metodo: "Transferencia".to_string(),
        },
    ]
}

pub fn reserva_de_muestra(id: i32) -> Reserva {
    Reserva {
        id,
        cancha_nombre: "Cancha 1".to_string(),
        fecha: "2026-03-10".to_string(),
        hora: "18:00".to_string(),
        duracion: 90,
        usuario_nombre: "Juan Pérez".to_string(),
    }
}

pub fn reservas_de_muestra() -> Vec<Reserva> {
    vec![reserva_de_muestra(1), reserva_de_muestra(2)]
}

/// Formulario completo con cancha 1 y pago 2 elegidos
pub fn formulario_valido() -> DatosFormulario {
    DatosFormulario {
        nombre: " Juan Pérez ".to_string(),
        email: "juanp@example.com".to_string(),
        cancha: "1".to_string(),
        fecha: "2026-03-10".to_string(),
        hora: "18:00".to_string(),
        duracion: "90".to_string(),
        jugadores: "10".to_string(),
        pago: "2".to_string(),
    }
}
