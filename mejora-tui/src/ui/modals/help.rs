use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::theme::theme_colors;
use super::utils::centered_rect;
use crate::app::{App, Tab};

/// Render help modal
pub fn render_help_modal(frame: &mut Frame, app: &App) {
    let theme = theme_colors();
    let area = frame.area();

    let modal_area = centered_rect(70, 75, area);
    frame.render_widget(Clear, modal_area);

    let shortcuts = get_shortcuts_for_context(app);

    let mut lines = vec![Line::from("")];
    for (category, items) in shortcuts {
        lines.push(Line::from(Span::styled(
            category,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (key, description) in items {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), Style::default().fg(theme.success)),
                Span::styled(description, Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
    }

    let help_content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .title(" Atajos de Teclado ")
                .title_alignment(Alignment::Center)
                .style(Style::default().bg(theme.background)),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(help_content, modal_area);
}

/// Get shortcuts relevant to current context
fn get_shortcuts_for_context(
    app: &App,
) -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let mut shortcuts = vec![(
        "Global",
        vec![
            ("q / Esc", "Salir"),
            ("Tab / Shift+Tab", "Cambiar de pestaña"),
            ("?", "Mostrar u ocultar esta ayuda"),
        ],
    )];

    match app.current_tab {
        Tab::Formulario => {
            shortcuts.push((
                "Nueva Solicitud",
                vec![
                    ("↑/k ↓/j", "Moverse entre campos"),
                    ("←/→", "Cambiar área, urgencia o impacto"),
                    ("Enter", "Editar el campo / enviar en el botón"),
                    ("Esc", "Salir del modo edición"),
                ],
            ));
        }
        Tab::Listado => {
            shortcuts.push((
                "Mis Solicitudes",
                vec![
                    ("↑/k ↓/j", "Moverse entre solicitudes"),
                    ("Enter", "Ver detalle"),
                    ("a", "Ciclar filtro de área"),
                    ("e", "Ciclar filtro de estado"),
                    ("x", "Quitar filtros"),
                    ("r", "Recargar"),
                ],
            ));
        }
    }

    shortcuts
}
