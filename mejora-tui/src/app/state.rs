use mejora_types::{
    Area, Estado, Impacto, ResumenEstadisticas, Solicitud, SolicitudNueva, SolicitudResumen,
    Urgencia,
};

use ratatui::style::Style;
use ratatui::widgets::TableState;
use std::time::Instant;
use tui_textarea::TextArea;

use crate::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation, // Browsing content, shortcuts active
    Typing,     // In text input, shortcuts disabled
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Formulario,
    Listado,
}

impl Tab {
    pub fn next(&self) -> Self {
        match self {
            Tab::Formulario => Tab::Listado,
            Tab::Listado => Tab::Formulario,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Formulario => Tab::Listado,
            Tab::Listado => Tab::Formulario,
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            Tab::Formulario => "Nueva Solicitud",
            Tab::Listado => "Mis Solicitudes",
        }
    }
}

/// Monotonic ticket counter guarding each fetching view against stale
/// completions. A result is applied only if its ticket is still the
/// latest one issued for that view.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSeq {
    latest: u64,
}

impl FetchSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Fields of the intake form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campo {
    Area,
    Nombre,
    Email,
    Titulo,
    Descripcion,
    Situacion,
    Resultado,
    Urgencia,
    Impacto,
    Frecuencia,
    TiempoManual,
    Sistemas,
    Enlaces,
    Enviar,
}

impl Campo {
    pub const ORDEN: [Campo; 14] = [
        Campo::Area,
        Campo::Nombre,
        Campo::Email,
        Campo::Titulo,
        Campo::Descripcion,
        Campo::Situacion,
        Campo::Resultado,
        Campo::Urgencia,
        Campo::Impacto,
        Campo::Frecuencia,
        Campo::TiempoManual,
        Campo::Sistemas,
        Campo::Enlaces,
        Campo::Enviar,
    ];

    pub fn next(&self) -> Self {
        let i = Campo::ORDEN.iter().position(|c| c == self).unwrap_or(0);
        Campo::ORDEN[(i + 1) % Campo::ORDEN.len()]
    }

    pub fn previous(&self) -> Self {
        let i = Campo::ORDEN.iter().position(|c| c == self).unwrap_or(0);
        Campo::ORDEN[(i + Campo::ORDEN.len() - 1) % Campo::ORDEN.len()]
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Campo::Area => "Área solicitante",
            Campo::Nombre => "Nombre del solicitante",
            Campo::Email => "Correo electrónico",
            Campo::Titulo => "Título del proceso",
            Campo::Descripcion => "Descripción del proceso",
            Campo::Situacion => "Situación actual",
            Campo::Resultado => "Resultado esperado",
            Campo::Urgencia => "Urgencia",
            Campo::Impacto => "Impacto",
            Campo::Frecuencia => "Frecuencia del proceso",
            Campo::TiempoManual => "Tiempo manual estimado",
            Campo::Sistemas => "Sistemas involucrados",
            Campo::Enlaces => "Enlaces de documentación",
            Campo::Enviar => "Enviar",
        }
    }

    /// Enum-valued fields cycle with Left/Right instead of free text.
    pub fn es_seleccion(&self) -> bool {
        matches!(self, Campo::Area | Campo::Urgencia | Campo::Impacto)
    }

    pub fn es_multilinea(&self) -> bool {
        matches!(self, Campo::Descripcion | Campo::Situacion | Campo::Resultado)
    }

    pub fn es_opcional(&self) -> bool {
        matches!(
            self,
            Campo::Frecuencia | Campo::TiempoManual | Campo::Sistemas | Campo::Enlaces
        )
    }
}

/// Intake form state. Every free-text field keeps its own textarea so
/// a failed submission preserves everything typed.
pub struct FormularioState {
    pub campo: Campo,
    pub area: Area,
    pub urgencia: Urgencia,
    pub impacto: Impacto,
    pub nombre: TextArea<'static>,
    pub email: TextArea<'static>,
    pub titulo: TextArea<'static>,
    pub descripcion: TextArea<'static>,
    pub situacion: TextArea<'static>,
    pub resultado: TextArea<'static>,
    pub frecuencia: TextArea<'static>,
    pub tiempo_manual: TextArea<'static>,
    pub sistemas: TextArea<'static>,
    pub enlaces: TextArea<'static>,
    /// Submission in flight; the submit row shows "Enviando..." and
    /// re-entry is refused while set.
    pub enviando: bool,
    /// Flag to trigger the actual submit after the UI rendered the
    /// busy state, like `pending_load` on the listing.
    pub pending_submit: bool,
}

fn nueva_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea
}

fn contenido(textarea: &TextArea<'static>) -> String {
    textarea.lines().join("\n")
}

/// Blank or whitespace-only optional input becomes None so the wire
/// payload carries null instead of an empty string.
pub fn normalizar_opcional(texto: &str) -> Option<String> {
    let recortado = texto.trim();
    if recortado.is_empty() {
        None
    } else {
        Some(recortado.to_string())
    }
}

impl FormularioState {
    pub fn new() -> Self {
        Self {
            campo: Campo::Area,
            area: Area::ALL[0],
            urgencia: Urgencia::default(),
            impacto: Impacto::default(),
            nombre: nueva_textarea(),
            email: nueva_textarea(),
            titulo: nueva_textarea(),
            descripcion: nueva_textarea(),
            situacion: nueva_textarea(),
            resultado: nueva_textarea(),
            frecuencia: nueva_textarea(),
            tiempo_manual: nueva_textarea(),
            sistemas: nueva_textarea(),
            enlaces: nueva_textarea(),
            enviando: false,
            pending_submit: false,
        }
    }

    /// Editor backing a free-text field. None for selection fields and
    /// the submit row.
    pub fn editor_mut(&mut self, campo: Campo) -> Option<&mut TextArea<'static>> {
        match campo {
            Campo::Nombre => Some(&mut self.nombre),
            Campo::Email => Some(&mut self.email),
            Campo::Titulo => Some(&mut self.titulo),
            Campo::Descripcion => Some(&mut self.descripcion),
            Campo::Situacion => Some(&mut self.situacion),
            Campo::Resultado => Some(&mut self.resultado),
            Campo::Frecuencia => Some(&mut self.frecuencia),
            Campo::TiempoManual => Some(&mut self.tiempo_manual),
            Campo::Sistemas => Some(&mut self.sistemas),
            Campo::Enlaces => Some(&mut self.enlaces),
            _ => None,
        }
    }

    pub fn editor(&self, campo: Campo) -> Option<&TextArea<'static>> {
        match campo {
            Campo::Nombre => Some(&self.nombre),
            Campo::Email => Some(&self.email),
            Campo::Titulo => Some(&self.titulo),
            Campo::Descripcion => Some(&self.descripcion),
            Campo::Situacion => Some(&self.situacion),
            Campo::Resultado => Some(&self.resultado),
            Campo::Frecuencia => Some(&self.frecuencia),
            Campo::TiempoManual => Some(&self.tiempo_manual),
            Campo::Sistemas => Some(&self.sistemas),
            Campo::Enlaces => Some(&self.enlaces),
            _ => None,
        }
    }

    /// Display value for a field in the form listing.
    pub fn valor(&self, campo: Campo) -> String {
        match campo {
            Campo::Area => self.area.as_str().to_string(),
            Campo::Urgencia => self.urgencia.as_str().to_string(),
            Campo::Impacto => self.impacto.as_str().to_string(),
            Campo::Enviar => String::new(),
            _ => self
                .editor(campo)
                .map(contenido)
                .unwrap_or_default(),
        }
    }

    pub fn ciclar_seleccion(&mut self, campo: Campo, adelante: bool) {
        match campo {
            Campo::Area => self.area = ciclar(&Area::ALL, self.area, adelante),
            Campo::Urgencia => self.urgencia = ciclar(&Urgencia::ALL, self.urgencia, adelante),
            Campo::Impacto => self.impacto = ciclar(&Impacto::ALL, self.impacto, adelante),
            _ => {}
        }
    }

    /// Validate required fields in traversal order and build the wire
    /// payload. The first missing field is reported by label.
    pub fn validar(&self) -> Result<SolicitudNueva, String> {
        let obligatorios = [
            (Campo::Nombre, &self.nombre),
            (Campo::Email, &self.email),
            (Campo::Titulo, &self.titulo),
            (Campo::Descripcion, &self.descripcion),
            (Campo::Situacion, &self.situacion),
            (Campo::Resultado, &self.resultado),
        ];

        for (campo, editor) in obligatorios {
            if contenido(editor).trim().is_empty() {
                return Err(format!("El campo \"{}\" es obligatorio", campo.etiqueta()));
            }
        }

        let email = contenido(&self.email).trim().to_string();
        if !email.contains('@') {
            return Err("El correo electrónico no es válido".to_string());
        }

        Ok(SolicitudNueva {
            area_solicitante: self.area,
            nombre_solicitante: contenido(&self.nombre).trim().to_string(),
            email_solicitante: email,
            titulo_proceso: contenido(&self.titulo).trim().to_string(),
            descripcion_proceso: contenido(&self.descripcion).trim().to_string(),
            situacion_actual: contenido(&self.situacion).trim().to_string(),
            resultado_esperado: contenido(&self.resultado).trim().to_string(),
            urgencia: self.urgencia,
            impacto: self.impacto,
            frecuencia_proceso: normalizar_opcional(&contenido(&self.frecuencia)),
            tiempo_manual_estimado: normalizar_opcional(&contenido(&self.tiempo_manual)),
            sistemas_involucrados: normalizar_opcional(&contenido(&self.sistemas)),
            enlaces_documentacion: normalizar_opcional(&contenido(&self.enlaces)),
        })
    }

    /// Reset every field after a successful submission.
    pub fn reiniciar(&mut self) {
        *self = FormularioState::new();
    }
}

fn ciclar<T: Copy + PartialEq>(valores: &[T], actual: T, adelante: bool) -> T {
    let len = valores.len();
    let i = valores.iter().position(|v| *v == actual).unwrap_or(0);
    let siguiente = if adelante {
        (i + 1) % len
    } else {
        (i + len - 1) % len
    };
    valores[siguiente]
}

/// Active filter constraints for the listing. None means the query
/// parameter is omitted entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FiltroSeleccion {
    pub area: Option<Area>,
    pub estado: Option<Estado>,
}

impl FiltroSeleccion {
    /// None -> first value -> ... -> last value -> None
    pub fn ciclar_area(&mut self) {
        self.area = match self.area {
            None => Some(Area::ALL[0]),
            Some(actual) => Area::ALL
                .iter()
                .position(|a| *a == actual)
                .and_then(|i| Area::ALL.get(i + 1).copied()),
        };
    }

    pub fn ciclar_estado(&mut self) {
        self.estado = match self.estado {
            None => Some(Estado::ALL[0]),
            Some(actual) => Estado::ALL
                .iter()
                .position(|e| *e == actual)
                .and_then(|i| Estado::ALL.get(i + 1).copied()),
        };
    }

    pub fn limpiar(&mut self) {
        self.area = None;
        self.estado = None;
    }

    pub fn activo(&self) -> bool {
        self.area.is_some() || self.estado.is_some()
    }
}

/// Listing tab state. Owns the fetched rows exclusively; every
/// successful fetch replaces them wholesale.
pub struct ListadoState {
    pub solicitudes: Vec<SolicitudResumen>,
    pub table_state: TableState,
    pub loading: bool,
    pub error: Option<String>,
    /// Flag to trigger the actual load after the UI renders the
    /// loading state
    pub pending_load: bool,
    pub filtro: FiltroSeleccion,
    pub seq: FetchSeq,
}

impl ListadoState {
    pub fn new() -> Self {
        Self {
            solicitudes: Vec::new(),
            table_state: TableState::default(),
            loading: false,
            error: None,
            pending_load: true,
            filtro: FiltroSeleccion::default(),
            seq: FetchSeq::default(),
        }
    }

    pub fn seleccionada(&self) -> Option<&SolicitudResumen> {
        self.table_state
            .selected()
            .and_then(|i| self.solicitudes.get(i))
    }

    pub fn siguiente(&mut self) {
        if self.solicitudes.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < self.solicitudes.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn anterior(&mut self) {
        if self.solicitudes.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

/// Detail modal state. Built only after the full solicitud arrived, so
/// the modal never opens half-populated.
pub struct DetalleState {
    pub solicitud: Solicitud,
}

/// Summary counters. A failed refresh keeps the previous values.
pub struct EstadisticasState {
    pub resumen: Option<ResumenEstadisticas>,
    pub seq: FetchSeq,
}

impl EstadisticasState {
    pub fn new() -> Self {
        Self {
            resumen: None,
            seq: FetchSeq::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Exito,
    Error,
}

/// Single transient notification slot; a new toast replaces whatever
/// is showing.
pub struct Toast {
    pub mensaje: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub api_client: ApiClient,
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub formulario: FormularioState,
    pub listado: ListadoState,
    pub detalle: Option<DetalleState>,
    pub detalle_seq: FetchSeq,
    pub estadisticas: EstadisticasState,
    pub toast: Option<Toast>,
    pub log_config: crate::logging::LogConfig,
}
