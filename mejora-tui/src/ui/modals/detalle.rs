use mejora_types::Solicitud;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::formatting::{format_fecha, wrap_texto, BORDER_PADDING};
use super::super::theme::{estado_style, theme_colors, urgencia_style};
use super::utils::centered_rect;
use crate::app::App;

/// Build the label/value rows for the detail modal. Optional fields
/// produce a row only when present and non-blank, so an absent value
/// leaves no placeholder behind.
pub fn detalle_rows(solicitud: &Solicitud) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Número", solicitud.numero_solicitud.clone()),
        ("Estado", solicitud.estado.as_str().to_string()),
        ("Área solicitante", solicitud.area_solicitante.as_str().to_string()),
        ("Solicitante", solicitud.nombre_solicitante.clone()),
        ("Correo", solicitud.email_solicitante.clone()),
        ("Título", solicitud.titulo_proceso.clone()),
        ("Descripción", solicitud.descripcion_proceso.clone()),
        ("Situación actual", solicitud.situacion_actual.clone()),
        ("Resultado esperado", solicitud.resultado_esperado.clone()),
        ("Urgencia", solicitud.urgencia.as_str().to_string()),
        ("Impacto", solicitud.impacto.as_str().to_string()),
    ];

    let opcionales = [
        ("Frecuencia", &solicitud.frecuencia_proceso),
        ("Tiempo manual estimado", &solicitud.tiempo_manual_estimado),
        ("Sistemas involucrados", &solicitud.sistemas_involucrados),
        ("Enlaces", &solicitud.enlaces_documentacion),
    ];
    for (etiqueta, valor) in opcionales {
        if let Some(v) = valor {
            if !v.trim().is_empty() {
                rows.push((etiqueta, v.clone()));
            }
        }
    }

    rows.push(("Fecha de creación", format_fecha(&solicitud.fecha_creacion)));
    if let Some(actualizacion) = &solicitud.fecha_actualizacion {
        rows.push(("Última actualización", format_fecha(actualizacion)));
    }
    if let Some(notas) = &solicitud.notas_internas {
        if !notas.trim().is_empty() {
            rows.push(("Notas internas", notas.clone()));
        }
    }

    rows
}

/// Render the detail modal for the currently opened solicitud
pub fn render_detalle_modal(frame: &mut Frame, app: &App) {
    let detalle = match &app.detalle {
        Some(d) => d,
        None => return,
    };
    let theme = theme_colors();
    let area = frame.area();

    let modal_area = centered_rect(72, 80, area);
    frame.render_widget(Clear, modal_area);

    // Free-text fields get their own wrapped block instead of a
    // single label/value line.
    const MULTILINEA: [&str; 4] = [
        "Descripción",
        "Situación actual",
        "Resultado esperado",
        "Notas internas",
    ];
    let ancho = modal_area.width.saturating_sub(BORDER_PADDING) as usize;

    let mut lines = vec![Line::from("")];
    for (etiqueta, valor) in detalle_rows(&detalle.solicitud) {
        if MULTILINEA.contains(&etiqueta) {
            lines.push(Line::from(Span::styled(
                format!("  {}", etiqueta),
                Style::default().fg(theme.text_dim),
            )));
            lines.extend(wrap_texto(
                &valor,
                ancho,
                Style::default().fg(theme.text),
            ));
            lines.push(Line::from(""));
            continue;
        }

        let value_style = match etiqueta {
            "Urgencia" => urgencia_style(detalle.solicitud.urgencia),
            "Estado" => estado_style(detalle.solicitud.estado),
            _ => Style::default().fg(theme.text),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<24}", etiqueta),
                Style::default().fg(theme.text_dim),
            ),
            Span::styled(valor, value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc / Enter: cerrar",
        Style::default().fg(theme.text_dim),
    )));

    let titulo = format!(" Solicitud {} ", detalle.solicitud.numero_solicitud);
    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .title(titulo)
                .title_alignment(Alignment::Center)
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(content, modal_area);
}
