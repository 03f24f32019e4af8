//! # Cliente de Reservas de Canchas
//!
//! Frontend de terminal para el servicio de reservas deportivas.
//!
//! ## Características principales
//!
//! - **Alta de reservas**: formulario interactivo con validación de cancha
//!   y método de pago antes de enviar
//! - **Listado**: tabla de reservas con filtro opcional por cancha
//! - **Baja**: eliminación con confirmación y clave de administrador
//! - **Datos de referencia**: canchas y métodos de pago cargados del API
//!
//! ## Configuración
//!
//! Variables de entorno (archivo `.env`):
//!
//! ```env
//! # Servicio de reservas
//! RESERVAS_API_BASE=http://127.0.0.1:8000
//!
//! # Logging
//! RUST_LOG=info
//! ```
//!
//! ## Ejecución
//!
//! ```bash
//! # 1. Levantar el servicio de reservas en http://127.0.0.1:8000
//!
//! # 2. Ejecutar el cliente
//! cargo run
//!
//! # 3. Comandos disponibles
//! # reservar | listar | filtro <id|todas> | eliminar <id> | recargar | menu | salir
//! ```

use std::io::{self, BufRead, Write};

use canchas_client::api::ClienteHttp;
use canchas_client::app::App;
use canchas_client::config::Config;
use canchas_client::ui::{Vista, VistaConsola};

/// Función principal del cliente
///
/// 1. Carga variables de entorno desde `.env`
/// 2. Configura el sistema de logging con tracing
/// 3. Construye el cliente HTTP contra la base configurada
/// 4. Fija la fecha mínima y carga datos de referencia y listado inicial
/// 5. Atiende comandos del usuario hasta `salir`
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Configurar sistema de logging con tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("canchas_client=info".parse().unwrap()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(api_base = %config.api_base, "Iniciando cliente de reservas");

    let cliente = ClienteHttp::new(config.api_base);
    let mut app = App::new(cliente, VistaConsola::new());

    // Equivalente del arranque en DOM ready del original
    app.fijar_fecha_minima();
    app.cargar_datos_referencia().await;
    app.cargar_reservas().await;

    println!();
    println!("Comandos: reservar | listar | filtro <id|todas> | eliminar <id> | recargar | menu | salir");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut linea = String::new();
        match stdin.lock().read_line(&mut linea) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                tracing::error!(error = %error, "Error leyendo la entrada");
                break;
            }
        }

        let mut partes = linea.split_whitespace();
        match (partes.next(), partes.next()) {
            (Some("reservar"), _) => app.guardar_reserva().await,
            (Some("listar"), _) => app.cargar_reservas().await,
            (Some("filtro"), Some(valor)) => {
                // El cambio del control dispara la recarga, como el evento
                // change del original
                if app.vista_mut().seleccionar_filtro(valor) {
                    app.cargar_reservas().await;
                } else {
                    println!("Ese valor no está en el filtro de canchas.");
                }
            }
            (Some("eliminar"), Some(id)) => match id.parse::<i32>() {
                Ok(id) => app.eliminar_reserva(id).await,
                Err(_) => println!("Uso: eliminar <id>"),
            },
            (Some("recargar"), _) => app.cargar_datos_referencia().await,
            (Some("menu"), _) => app.alternar_menu(),
            (Some("salir"), _) => break,
            (None, _) => {}
            (Some(otro), _) => println!("Comando desconocido: {}", otro),
        }
    }

    tracing::info!("Cliente finalizado");
}
