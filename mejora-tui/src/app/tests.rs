use super::*;
use chrono::TimeZone;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mejora_types::{Area, Estado, ResumenEstadisticas, SolicitudResumen, Urgencia};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn resumen(id: i64) -> SolicitudResumen {
    SolicitudResumen {
        id,
        numero_solicitud: format!("AUTO-20250812-{:06X}", id),
        area_solicitante: Area::Scc,
        titulo_proceso: format!("Proceso {}", id),
        urgencia: Urgencia::Media,
        estado: Estado::Recibido,
        fecha_creacion: chrono::Utc.with_ymd_and_hms(2025, 8, 12, 9, 0, 0).unwrap(),
    }
}

#[test]
fn test_help_toggle() {
    let mut app = App::new();
    assert!(!app.show_help);

    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(app.show_help);

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(!app.show_help);
}

#[test]
fn test_help_swallows_other_keys() {
    let mut app = App::new();
    app.show_help = true;

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(app.running, "q while help is open must not quit");
    assert!(app.show_help);

    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert_eq!(app.current_tab, Tab::Formulario);
}

#[test]
fn test_tab_switch_schedules_listing_load() {
    let mut app = App::new();
    app.listado.pending_load = false;
    app.input_mode = InputMode::Navigation;

    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert_eq!(app.current_tab, Tab::Listado);
    assert!(app.listado.pending_load);

    // Switching away and back schedules it again
    app.listado.pending_load = false;
    app.handle_key_event(key_event(KeyCode::BackTab)).unwrap();
    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert!(app.listado.pending_load);
}

#[test]
fn test_quit_only_in_navigation_mode() {
    let mut app = App::new();
    app.formulario.campo = Campo::Nombre;
    app.input_mode = InputMode::Typing;

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(app.running, "q while typing goes into the editor");
    assert_eq!(app.formulario.valor(Campo::Nombre), "q");

    app.input_mode = InputMode::Navigation;
    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(!app.running);
}

#[test]
fn test_esc_closes_detail_modal_not_app() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;
    app.detalle = Some(DetalleState {
        solicitud: serde_json::from_value(serde_json::json!({
            "id": 1,
            "numero_solicitud": "AUTO-20250812-000001",
            "area_solicitante": "SCC",
            "nombre_solicitante": "Ana",
            "email_solicitante": "ana@example.com",
            "titulo_proceso": "t",
            "descripcion_proceso": "d",
            "situacion_actual": "s",
            "resultado_esperado": "r",
            "urgencia": "Media",
            "impacto": "Medio",
            "estado": "Recibido",
            "fecha_creacion": "2025-08-12T09:00:00"
        }))
        .unwrap(),
    });

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(app.detalle.is_none());
    assert!(app.running, "Esc closed the modal, not the app");

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(!app.running);
}

#[test]
fn test_area_filter_cycles_and_schedules_load() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;
    app.listado.pending_load = false;

    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.listado.filtro.area, Some(Area::ALL[0]));
    assert!(app.listado.pending_load);

    // Cycling through the whole list ends back at None
    for _ in 0..Area::ALL.len() {
        app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    }
    assert_eq!(app.listado.filtro.area, None);
}

#[test]
fn test_estado_filter_cycles() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;

    app.handle_key_event(key_event(KeyCode::Char('e'))).unwrap();
    assert_eq!(app.listado.filtro.estado, Some(Estado::ALL[0]));

    for _ in 0..Estado::ALL.len() {
        app.handle_key_event(key_event(KeyCode::Char('e'))).unwrap();
    }
    assert_eq!(app.listado.filtro.estado, None);
}

#[test]
fn test_clear_filters_requires_active_filter() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;
    app.listado.pending_load = false;

    // Without an active filter x does nothing
    app.handle_key_event(key_event(KeyCode::Char('x'))).unwrap();
    assert!(!app.listado.pending_load);

    app.listado.filtro.area = Some(Area::Dco);
    app.listado.filtro.estado = Some(Estado::Completado);
    app.handle_key_event(key_event(KeyCode::Char('x'))).unwrap();
    assert!(!app.listado.filtro.activo());
    assert!(app.listado.pending_load);
}

#[test]
fn test_reload_key_schedules_load() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;
    app.listado.pending_load = false;

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();
    assert!(app.listado.pending_load);
}

#[test]
fn test_listing_selection_stays_in_bounds() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;
    app.listado.solicitudes = vec![resumen(1), resumen(2), resumen(3)];
    app.listado.table_state.select(Some(0));

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.listado.table_state.selected(), Some(2));

    app.handle_key_event(key_event(KeyCode::Char('k'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('k'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('k'))).unwrap();
    assert_eq!(app.listado.table_state.selected(), Some(0));

    assert_eq!(app.listado.seleccionada().map(|s| s.id), Some(1));
}

#[test]
fn test_navigation_on_empty_listing_selects_nothing() {
    let mut app = App::new();
    app.current_tab = Tab::Listado;

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.listado.table_state.selected(), None);
    assert!(app.listado.seleccionada().is_none());
}

#[test]
fn test_enter_edits_text_field_and_esc_leaves() {
    let mut app = App::new();
    app.formulario.campo = Campo::Nombre;

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.input_mode, InputMode::Typing);

    app.handle_key_event(key_event(KeyCode::Char('A'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('n'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.formulario.valor(Campo::Nombre), "Ana");

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert_eq!(app.formulario.valor(Campo::Nombre), "Ana");
}

#[test]
fn test_enter_on_single_line_field_advances_focus() {
    let mut app = App::new();
    app.formulario.campo = Campo::Nombre;
    app.input_mode = InputMode::Typing;

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert_eq!(app.formulario.campo, Campo::Email);
}

#[test]
fn test_enter_in_multiline_field_inserts_newline() {
    let mut app = App::new();
    app.formulario.campo = Campo::Descripcion;
    app.input_mode = InputMode::Typing;

    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('b'))).unwrap();

    assert_eq!(app.input_mode, InputMode::Typing);
    assert_eq!(app.formulario.valor(Campo::Descripcion), "a\nb");
}

#[test]
fn test_selection_fields_cycle_with_arrows() {
    let mut app = App::new();
    app.formulario.campo = Campo::Urgencia;
    assert_eq!(app.formulario.urgencia, Urgencia::Media);

    app.handle_key_event(key_event(KeyCode::Right)).unwrap();
    assert_eq!(app.formulario.urgencia, Urgencia::Alta);

    app.handle_key_event(key_event(KeyCode::Left)).unwrap();
    app.handle_key_event(key_event(KeyCode::Left)).unwrap();
    assert_eq!(app.formulario.urgencia, Urgencia::Baja);

    // Arrows on a text field do not enter typing mode
    app.formulario.campo = Campo::Nombre;
    app.handle_key_event(key_event(KeyCode::Right)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);
}

fn llenar_obligatorios(app: &mut App) {
    app.formulario.nombre.insert_str("Ana Torres");
    app.formulario.email.insert_str("ana@example.com");
    app.formulario.titulo.insert_str("Carga de facturas");
    app.formulario.descripcion.insert_str("Se capturan a mano");
    app.formulario.situacion.insert_str("Tres horas al día");
    app.formulario.resultado.insert_str("Captura automática");
}

#[test]
fn test_validar_reports_first_missing_field() {
    let app = App::new();
    let err = app.formulario.validar().unwrap_err();
    assert_eq!(err, "El campo \"Nombre del solicitante\" es obligatorio");
}

#[test]
fn test_validar_rejects_email_without_at() {
    let mut app = App::new();
    llenar_obligatorios(&mut app);
    app.formulario.email = {
        let mut t = tui_textarea::TextArea::default();
        t.insert_str("ana.example.com");
        t
    };

    let err = app.formulario.validar().unwrap_err();
    assert_eq!(err, "El correo electrónico no es válido");
}

#[test]
fn test_validar_builds_payload_with_blank_optionals_as_none() {
    let mut app = App::new();
    llenar_obligatorios(&mut app);
    app.formulario.frecuencia.insert_str("   ");
    app.formulario.sistemas.insert_str("SAP, Excel");

    let nueva = app.formulario.validar().unwrap();
    assert_eq!(nueva.nombre_solicitante, "Ana Torres");
    assert_eq!(nueva.frecuencia_proceso, None);
    assert_eq!(nueva.tiempo_manual_estimado, None);
    assert_eq!(nueva.sistemas_involucrados, Some("SAP, Excel".to_string()));
}

#[test]
fn test_reiniciar_clears_the_form() {
    let mut app = App::new();
    llenar_obligatorios(&mut app);
    app.formulario.campo = Campo::Enviar;
    app.formulario.urgencia = Urgencia::Critica;

    app.formulario.reiniciar();
    assert_eq!(app.formulario.campo, Campo::Area);
    assert_eq!(app.formulario.urgencia, Urgencia::Media);
    assert_eq!(app.formulario.valor(Campo::Nombre), "");
}

#[test]
fn test_enter_on_submit_row_schedules_send_once() {
    let mut app = App::new();
    app.formulario.campo = Campo::Enviar;

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert!(app.formulario.enviando, "busy state set for the next frame");
    assert!(app.formulario.pending_submit);

    // The event loop picked the flag up; a second Enter while the
    // submission is active must not schedule another one.
    app.formulario.pending_submit = false;
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert!(!app.formulario.pending_submit);
}

#[tokio::test]
async fn test_failed_validation_clears_busy_state() {
    let mut app = App::new();
    app.formulario.campo = Campo::Enviar;
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert!(app.formulario.enviando);

    // Empty form: validation fails before any request is made
    app.formulario.pending_submit = false;
    app.submit_solicitud().await.unwrap();

    assert!(!app.formulario.enviando, "submit label restored after failure");
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(
        toast.mensaje,
        "El campo \"Nombre del solicitante\" es obligatorio"
    );
}

#[tokio::test]
async fn test_failed_stats_refresh_keeps_previous_counters() {
    // Nothing listens on port 1, so the request fails immediately.
    let mut app = App::with_server_url("http://127.0.0.1:1/api/solicitudes".to_string());
    app.estadisticas.resumen = Some(ResumenEstadisticas {
        total: 7,
        recibidas: 3,
        en_analisis: 2,
        en_desarrollo: 1,
        completadas: 1,
    });

    app.load_estadisticas().await.unwrap();

    let resumen = app.estadisticas.resumen.as_ref().unwrap();
    assert_eq!(resumen.total, 7);
    assert_eq!(resumen.completadas, 1);
    assert!(app.toast.is_none(), "stats failures never raise a toast");
}

#[test]
fn test_fetch_seq_discards_stale_tickets() {
    let mut seq = FetchSeq::default();
    let primero = seq.begin();
    let segundo = seq.begin();

    assert!(!seq.is_current(primero));
    assert!(seq.is_current(segundo));
}

#[test]
fn test_toast_is_replaced_and_expires() {
    let mut app = App::new();
    app.notify_exito("primero");
    app.notify_error("segundo");

    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.mensaje, "segundo");
    assert_eq!(toast.kind, ToastKind::Error);

    // Fresh toast survives a clear pass
    app.clear_expired_toast();
    assert!(app.toast.is_some());

    // Backdate past the display window
    app.toast.as_mut().unwrap().shown_at = Instant::now() - Duration::from_secs(4);
    app.clear_expired_toast();
    assert!(app.toast.is_none());
}

#[test]
fn test_campo_traversal_is_a_cycle() {
    let mut campo = Campo::ORDEN[0];
    for _ in 0..Campo::ORDEN.len() {
        campo = campo.next();
    }
    assert_eq!(campo, Campo::ORDEN[0]);

    campo = campo.previous();
    assert_eq!(campo, Campo::Enviar);
}

proptest! {
    #[test]
    fn prop_normalizar_opcional_never_returns_blank(s in "\\PC*") {
        match normalizar_opcional(&s) {
            Some(v) => {
                prop_assert!(!v.trim().is_empty());
                prop_assert_eq!(v.trim(), v.as_str());
            }
            None => prop_assert!(s.trim().is_empty()),
        }
    }

    #[test]
    fn prop_area_filter_cycle_has_fixed_period(pasos in 0usize..40) {
        let mut filtro = FiltroSeleccion::default();
        for _ in 0..pasos {
            filtro.ciclar_area();
        }
        // None plus every known area, then back to None
        let periodo = Area::ALL.len() + 1;
        prop_assert_eq!(filtro.area.is_none(), pasos % periodo == 0);
    }
}
