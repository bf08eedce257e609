use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::log_api_call;

pub mod state;
pub use state::*;
pub mod handlers;

/// How long a toast stays on screen before the event loop clears it.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            api_client: ApiClient::default(),
            current_tab: Tab::Formulario,
            input_mode: InputMode::Navigation,
            show_help: false,
            formulario: FormularioState::new(),
            listado: ListadoState::new(),
            detalle: None,
            detalle_seq: FetchSeq::default(),
            estadisticas: EstadisticasState::new(),
            toast: None,
            log_config: crate::logging::LogConfig::default(),
        }
    }

    pub fn with_server_url(server_url: String) -> Self {
        let mut app = Self::new();
        app.api_client = ApiClient::new(server_url);
        app
    }

    /// Toggle help modal
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch to next tab
    pub fn next_tab(&mut self) {
        let next = self.current_tab.next();
        self.switch_tab(next);
    }

    /// Switch to previous tab
    pub fn previous_tab(&mut self) {
        let prev = self.current_tab.previous();
        self.switch_tab(prev);
    }

    /// Entering the listing always schedules a refresh so it is never
    /// shown stale after navigating back.
    fn switch_tab(&mut self, new_tab: Tab) {
        if new_tab == Tab::Listado && self.current_tab != Tab::Listado {
            self.listado.pending_load = true;
        }
        self.current_tab = new_tab;
        self.input_mode = InputMode::Navigation;
    }

    pub fn notify_exito(&mut self, mensaje: impl Into<String>) {
        self.toast = Some(Toast {
            mensaje: mensaje.into(),
            kind: ToastKind::Exito,
            shown_at: Instant::now(),
        });
    }

    pub fn notify_error(&mut self, mensaje: impl Into<String>) {
        self.toast = Some(Toast {
            mensaje: mensaje.into(),
            kind: ToastKind::Error,
            shown_at: Instant::now(),
        });
    }

    /// Clear the toast once its display window elapsed
    pub fn clear_expired_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() > TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    /// Load the solicitudes listing with the current filters
    pub async fn load_solicitudes(&mut self) -> Result<()> {
        let ticket = self.listado.seq.begin();
        self.listado.loading = true;
        self.listado.error = None;

        // Yield to allow UI to render the loading state
        tokio::task::yield_now().await;

        let filtro = self.listado.filtro;
        log_api_call!(
            self.log_config,
            "listar_solicitudes area={:?} estado={:?}",
            filtro.area,
            filtro.estado
        );

        let result = self
            .api_client
            .listar_solicitudes(filtro.area, filtro.estado)
            .await;

        if !self.listado.seq.is_current(ticket) {
            // A newer fetch was issued while this one was in flight.
            return Ok(());
        }

        match result {
            Ok(solicitudes) => {
                if solicitudes.is_empty() {
                    self.listado.table_state.select(None);
                } else {
                    self.listado.table_state.select(Some(0));
                }
                self.listado.solicitudes = solicitudes;
                self.listado.loading = false;
            }
            Err(e) => {
                log::error!("Fallo al listar solicitudes: {}", e);
                self.listado.solicitudes = Vec::new();
                self.listado.table_state.select(None);
                self.listado.error = Some(e.mensaje());
                self.listado.loading = false;
            }
        }

        Ok(())
    }

    /// Refresh the summary counters. Failures keep the previous values
    /// and are only logged.
    pub async fn load_estadisticas(&mut self) -> Result<()> {
        let ticket = self.estadisticas.seq.begin();

        log_api_call!(self.log_config, "resumen_estadisticas");
        let result = self.api_client.resumen_estadisticas().await;

        if !self.estadisticas.seq.is_current(ticket) {
            return Ok(());
        }

        match result {
            Ok(resumen) => {
                self.estadisticas.resumen = Some(resumen);
            }
            Err(e) => {
                log::warn!("Fallo al cargar estadísticas: {}", e);
            }
        }

        Ok(())
    }

    /// Fetch one solicitud and open the detail modal. On failure the
    /// modal stays closed and the error is shown as a toast.
    pub async fn open_detalle(&mut self, id: i64) -> Result<()> {
        let ticket = self.detalle_seq.begin();

        log_api_call!(self.log_config, "obtener_solicitud id={}", id);
        let result = self.api_client.obtener_solicitud(id).await;

        if !self.detalle_seq.is_current(ticket) {
            return Ok(());
        }

        match result {
            Ok(solicitud) => {
                self.detalle = Some(DetalleState { solicitud });
            }
            Err(e) => {
                log::error!("Fallo al cargar detalle {}: {}", id, e);
                self.notify_error(e.mensaje());
            }
        }

        Ok(())
    }

    pub fn close_detalle(&mut self) {
        self.detalle = None;
    }

    /// Submit the intake form. Called from the event loop once the
    /// busy state rendered; `enviando` is cleared on every exit path.
    /// Validation failures never reach the server and the form keeps
    /// its content on any failure path.
    pub async fn submit_solicitud(&mut self) -> Result<()> {
        let nueva = match self.formulario.validar() {
            Ok(nueva) => nueva,
            Err(mensaje) => {
                self.formulario.enviando = false;
                self.notify_error(mensaje);
                return Ok(());
            }
        };

        log_api_call!(self.log_config, "crear_solicitud titulo={}", nueva.titulo_proceso);
        let result = self.api_client.crear_solicitud(&nueva).await;
        self.formulario.enviando = false;

        match result {
            Ok(solicitud) => {
                self.notify_exito(format!(
                    "Solicitud enviada exitosamente. Número: {}",
                    solicitud.numero_solicitud
                ));
                self.formulario.reiniciar();
                self.load_estadisticas().await?;
                self.switch_tab(Tab::Listado);
            }
            Err(e) => {
                log::error!("Fallo al crear solicitud: {}", e);
                self.notify_error(e.mensaje());
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key_event(self, key)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
