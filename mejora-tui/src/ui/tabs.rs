use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::formatting::*;
use super::modals::{render_detalle_modal, render_help_modal};
use super::theme::{estado_style, theme_colors, urgencia_style, ThemeColors};
use crate::app::{App, Campo, InputMode, Tab, ToastKind};

/// Render the main screen with tabs, stats strip, content and footer
pub fn render_main_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab header
            Constraint::Length(3), // Statistics strip
            Constraint::Min(0),    // Content (flexible)
            Constraint::Length(3), // Toast banner / key hints
        ])
        .split(area);

    render_tab_header(frame, app, chunks[0]);
    render_estadisticas(frame, app, chunks[1]);

    match app.current_tab {
        Tab::Formulario => render_formulario_tab(frame, app, chunks[2]),
        Tab::Listado => render_listado_tab(frame, app, chunks[2]),
    }

    render_footer(frame, app, chunks[3]);

    // Modals last so they draw on top
    if app.detalle.is_some() {
        render_detalle_modal(frame, app);
    }
    if app.show_help {
        render_help_modal(frame, app);
    }
}

fn render_tab_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = theme_colors();

    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in [Tab::Formulario, Tab::Listado].iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.text_dim)));
        }
        let style = if *tab == app.current_tab {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_dim)
        };
        spans.push(Span::styled(tab.titulo(), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mejora de Procesos ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

/// Five counters, always visible. Before the first successful fetch
/// (or after only failed ones) the values read "-".
fn render_estadisticas(frame: &mut Frame, app: &App, area: Rect) {
    let theme = theme_colors();

    let labels = ["Total", "Recibidas", "En Análisis", "En Desarrollo", "Completadas"];
    let valores: [String; 5] = match &app.estadisticas.resumen {
        Some(r) => [
            r.total.to_string(),
            r.recibidas.to_string(),
            r.en_analisis.to_string(),
            r.en_desarrollo.to_string(),
            r.completadas.to_string(),
        ],
        None => std::array::from_fn(|_| "-".to_string()),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    for i in 0..5 {
        let contador = Paragraph::new(Line::from(vec![
            Span::styled(
                valores[i].clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(labels[i], Style::default().fg(theme.text_dim)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(contador, chunks[i]);
    }
}

fn render_formulario_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = theme_colors();
    let editando = app.input_mode == InputMode::Typing;

    let chunks: Vec<Rect> = if editando {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    let mut lines = vec![Line::from("")];
    for campo in Campo::ORDEN {
        let enfocado = campo == app.formulario.campo;
        let prefix = if enfocado { "▶ " } else { "  " };
        let label_style = if enfocado {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        if campo == Campo::Enviar {
            let etiqueta = if app.formulario.enviando {
                "[ Enviando... ]"
            } else {
                "[ Enviar Solicitud ]"
            };
            let style = if app.formulario.enviando {
                Style::default().fg(theme.text_dim)
            } else if enfocado {
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.success)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), label_style),
                Span::styled(etiqueta, style),
            ]));
            continue;
        }

        let marcador = if campo.es_opcional() { "" } else { " *" };
        let valor = app.formulario.valor(campo);
        let resumen = match valor.split('\n').next() {
            Some(primera) if valor.contains('\n') => format!("{} …", primera),
            Some(primera) => primera.to_string(),
            None => String::new(),
        };
        let value_span = if resumen.is_empty() && !campo.es_seleccion() {
            Span::styled("(vacío)", Style::default().fg(theme.text_dim))
        } else {
            Span::styled(resumen, Style::default().fg(theme.text))
        };

        let flechas = if campo.es_seleccion() && enfocado {
            "  ←/→"
        } else {
            ""
        };

        lines.push(Line::from(vec![
            Span::styled(prefix.to_string(), label_style),
            Span::styled(format!("{}{:<2}", campo.etiqueta(), marcador), label_style),
            Span::raw("  "),
            value_span,
            Span::styled(flechas, Style::default().fg(theme.text_dim)),
        ]));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Nueva Solicitud (* obligatorio) ")
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(form, chunks[0]);

    // Editor pane for the focused free-text field
    if editando {
        let campo = app.formulario.campo;
        if let Some(editor) = app.formulario.editor_mut(campo) {
            editor.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} (Esc: terminar) ", campo.etiqueta()))
                    .border_style(Style::default().fg(theme.accent)),
            );
            frame.render_widget(&*editor, chunks[1]);
        }
    }
}

fn render_listado_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = theme_colors();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_filtros(frame, app, chunks[0], &theme);

    let tabla_area = chunks[1];
    let bloque = Block::default()
        .borders(Borders::ALL)
        .title(" Solicitudes ")
        .border_style(Style::default().fg(theme.border));

    // Loading placeholder replaces the rows until the fetch resolves
    if app.listado.loading {
        let loading = Paragraph::new(create_loading_display("Cargando solicitudes...", &theme))
            .alignment(Alignment::Center)
            .block(bloque);
        frame.render_widget(loading, tabla_area);
        return;
    }

    if let Some(error) = &app.listado.error {
        let lines = create_error_display(error, Some("Presiona 'r' para reintentar"), &theme);
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(bloque);
        frame.render_widget(widget, tabla_area);
        return;
    }

    if app.listado.solicitudes.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No hay solicitudes registradas",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Crea la primera desde la pestaña Nueva Solicitud",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(bloque);
        frame.render_widget(empty, tabla_area);
        return;
    }

    let header = Row::new(
        ["Número", "Área", "Título", "Urgencia", "Estado", "Fecha"]
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, Style::default().fg(theme.text_dim)))),
    )
    .height(1);

    let rows: Vec<Row> = app
        .listado
        .solicitudes
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(Span::styled(
                    s.numero_solicitud.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::raw(s.area_solicitante.as_str())),
                Cell::from(Span::raw(s.titulo_proceso.clone())),
                Cell::from(Span::styled(s.urgencia.as_str(), urgencia_style(s.urgencia))),
                Cell::from(Span::styled(s.estado.as_str(), estado_style(s.estado))),
                Cell::from(Span::styled(
                    format_fecha(&s.fecha_creacion),
                    Style::default().fg(theme.text_dim),
                )),
            ])
        })
        .collect();

    let tabla = Table::new(
        rows,
        [
            Constraint::Length(21),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(bloque)
    .highlight_style(Style::default().bg(theme.highlight_bg))
    .highlight_symbol("▶ ");

    frame.render_stateful_widget(tabla, tabla_area, &mut app.listado.table_state);
}

fn render_filtros(frame: &mut Frame, app: &App, area: Rect, theme: &ThemeColors) {
    let filtro = &app.listado.filtro;
    let area_txt = filtro
        .area
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| "todas".to_string());
    let estado_txt = filtro
        .estado
        .map(|e| e.as_str().to_string())
        .unwrap_or_else(|| "todos".to_string());

    let style_activo = |activo: bool| {
        if activo {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_dim)
        }
    };

    let linea = Line::from(vec![
        Span::styled(" Filtros  ", Style::default().fg(theme.text_dim)),
        Span::styled("[a] Área: ", Style::default().fg(theme.text_dim)),
        Span::styled(area_txt, style_activo(filtro.area.is_some())),
        Span::styled("   [e] Estado: ", Style::default().fg(theme.text_dim)),
        Span::styled(estado_txt, style_activo(filtro.estado.is_some())),
        Span::styled(
            if filtro.activo() { "   [x] limpiar" } else { "" },
            Style::default().fg(theme.text_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(linea), area);
}

/// Toast banner when a notification is showing, key hints otherwise
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = theme_colors();

    if let Some(toast) = &app.toast {
        let (style, titulo) = match toast.kind {
            ToastKind::Exito => (
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
                " Mensaje ",
            ),
            ToastKind::Error => (
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
                " Error ",
            ),
        };
        let banner = Paragraph::new(toast.mensaje.clone())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(titulo)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(banner, area);
        return;
    }

    let hints = match (app.current_tab, app.input_mode) {
        (_, InputMode::Typing) => "Esc: terminar edición | Enter: siguiente campo",
        (Tab::Formulario, _) => {
            "↑/↓: campo | ←/→: valor | Enter: editar/enviar | Tab: pestaña | ?: ayuda | q: salir"
        }
        (Tab::Listado, _) => {
            "↑/↓: fila | Enter: detalle | a/e: filtros | x: limpiar | r: recargar | ?: ayuda | q: salir"
        }
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(theme.text_dim))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, area);
}

/// Create a formatted loading state display
fn create_loading_display(message: &str, theme: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⟳ {}", message),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Espera un momento",
            Style::default().fg(theme.text_dim),
        )),
    ]
}

/// Create a formatted error message display with optional help text
fn create_error_display(
    error_message: &str,
    help_text: Option<&str>,
    theme: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            error_message.to_string(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(help) = help_text {
        lines.push(Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(theme.text_dim),
        )));
    }

    lines
}
