//! Implementación de [`Vista`] para la terminal.

use std::io::{self, Write};
use std::time::Duration;

use crate::ui::render::FILTRO_TODAS;
use crate::ui::view::{DatosFormulario, EstadoTabla, Mensaje, Opcion, TipoMensaje, Vista};

pub struct VistaConsola {
    fecha_minima: String,
    filtro: String,
    opciones_filtro: Vec<Opcion>,
    menu_abierto: bool,
}

impl VistaConsola {
    pub fn new() -> Self {
        Self {
            fecha_minima: String::new(),
            filtro: FILTRO_TODAS.to_string(),
            opciones_filtro: Vec::new(),
            menu_abierto: false,
        }
    }
}

impl Default for VistaConsola {
    fn default() -> Self {
        Self::new()
    }
}

fn pedir_campo(etiqueta: &str) -> String {
    print!("{}: ", etiqueta);
    io::stdout().flush().ok();
    let mut linea = String::new();
    io::stdin().read_line(&mut linea).ok();
    linea.trim().to_string()
}

impl Vista for VistaConsola {
    fn leer_formulario(&mut self) -> DatosFormulario {
        println!("--- Nueva reserva ---");
        if !self.fecha_minima.is_empty() {
            println!("(fecha mínima: {})", self.fecha_minima);
        }
        DatosFormulario {
            nombre: pedir_campo("Nombre"),
            email: pedir_campo("Email"),
            cancha: pedir_campo("Cancha (id)"),
            fecha: pedir_campo("Fecha (YYYY-MM-DD)"),
            hora: pedir_campo("Hora (HH:MM)"),
            duracion: pedir_campo("Duración (minutos)"),
            jugadores: pedir_campo("Jugadores"),
            pago: pedir_campo("Método de pago (id)"),
        }
    }

    fn reiniciar_formulario(&mut self) {
        // En la consola el formulario se pide campo a campo, no hay nada
        // persistente que vaciar.
    }

    fn fijar_fecha_minima(&mut self, fecha: &str) {
        self.fecha_minima = fecha.to_string();
    }

    fn mostrar_mensaje(&mut self, mensaje: Mensaje) {
        match mensaje.tipo {
            TipoMensaje::Ok => println!("{}", mensaje.texto),
            TipoMensaje::Error => eprintln!("{}", mensaje.texto),
        }
    }

    fn mostrar_mensaje_temporal(&mut self, mensaje: Mensaje, _visible: Duration) {
        // La terminal desplaza el texto sola; el retiro temporizado solo
        // aplica a vistas persistentes.
        self.mostrar_mensaje(mensaje);
    }

    fn poblar_select_canchas(&mut self, opciones: Vec<Opcion>) {
        println!("Canchas disponibles:");
        for opcion in opciones.iter().filter(|o| !o.valor.is_empty()) {
            println!("  [{}] {}", opcion.valor, opcion.etiqueta);
        }
    }

    fn poblar_select_pagos(&mut self, opciones: Vec<Opcion>) {
        println!("Métodos de pago:");
        for opcion in opciones.iter().filter(|o| !o.valor.is_empty()) {
            println!("  [{}] {}", opcion.valor, opcion.etiqueta);
        }
    }

    fn poblar_filtro_canchas(&mut self, opciones: Vec<Opcion>) {
        self.opciones_filtro = opciones;
    }

    fn filtro_actual(&self) -> Option<String> {
        Some(self.filtro.clone())
    }

    fn seleccionar_filtro(&mut self, valor: &str) -> bool {
        if self.opciones_filtro.iter().any(|o| o.valor == valor) {
            self.filtro = valor.to_string();
            true
        } else {
            false
        }
    }

    fn mostrar_tabla(&mut self, estado: EstadoTabla) {
        match estado {
            EstadoTabla::Cargando => println!("Cargando..."),
            EstadoTabla::Vacia => println!("No hay reservas."),
            EstadoTabla::Error => println!("Error al cargar las reservas."),
            EstadoTabla::Filas(filas) => {
                println!(
                    "{:<4} {:<16} {:<12} {:<7} {:<8} {}",
                    "ID", "Cancha", "Fecha", "Hora", "Durac.", "Cliente"
                );
                for fila in filas {
                    println!(
                        "{:<4} {:<16} {:<12} {:<7} {:<8} {}",
                        fila.id, fila.cancha, fila.fecha, fila.hora, fila.duracion, fila.cliente
                    );
                }
            }
        }
    }

    fn confirmar(&mut self, pregunta: &str) -> bool {
        let respuesta = pedir_campo(&format!("{} (s/n)", pregunta));
        matches!(respuesta.to_lowercase().as_str(), "s" | "si" | "sí")
    }

    fn pedir_clave(&mut self, mensaje: &str) -> Option<String> {
        let clave = pedir_campo(mensaje);
        if clave.is_empty() {
            None
        } else {
            Some(clave)
        }
    }

    fn avisar(&mut self, texto: &str) {
        println!("{}", texto);
    }

    fn alternar_menu(&mut self) {
        self.menu_abierto = !self.menu_abierto;
        if self.menu_abierto {
            println!("Menú: reservar | listar | filtro <id|todas> | eliminar <id> | recargar | menu | salir");
        } else {
            println!("(menú cerrado)");
        }
    }
}
