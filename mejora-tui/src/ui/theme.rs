use mejora_types::{Estado, Urgencia};
use ratatui::style::{Color, Modifier, Style};

pub struct ThemeColors {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

/// Single dark palette for the intake client
pub fn theme_colors() -> ThemeColors {
    ThemeColors {
        primary: Color::Rgb(100, 200, 255),   // Light blue
        accent: Color::Rgb(255, 180, 80),     // Amber
        text: Color::Rgb(220, 220, 220),      // Light gray
        text_dim: Color::Rgb(120, 120, 120),  // Medium gray
        background: Color::Rgb(20, 20, 25),   // Very dark blue-gray
        border: Color::Rgb(60, 60, 70),       // Dark gray-blue
        success: Color::Rgb(100, 255, 150),   // Bright green
        warning: Color::Rgb(255, 200, 100),   // Orange
        error: Color::Rgb(255, 100, 100),     // Bright red
        highlight_bg: Color::Rgb(40, 40, 50), // Slightly lighter than bg
    }
}

/// Badge style for an urgency value. Exhaustive on purpose: a value
/// outside the known set renders with the medium style.
pub fn urgencia_style(urgencia: Urgencia) -> Style {
    match urgencia {
        Urgencia::Baja => Style::default().fg(Color::Rgb(100, 255, 150)),
        Urgencia::Media => Style::default().fg(Color::Rgb(255, 200, 100)),
        Urgencia::Alta => Style::default().fg(Color::Rgb(255, 140, 60)),
        Urgencia::Critica => Style::default()
            .fg(Color::Rgb(255, 100, 100))
            .add_modifier(Modifier::BOLD),
        Urgencia::Desconocida => Style::default().fg(Color::Rgb(255, 200, 100)),
    }
}

/// Badge style for a tracking state. Unknown values render with the
/// "recibido" style.
pub fn estado_style(estado: Estado) -> Style {
    match estado {
        Estado::Recibido => Style::default().fg(Color::Rgb(100, 200, 255)),
        Estado::EnAnalisis => Style::default().fg(Color::Rgb(255, 200, 100)),
        Estado::EnDesarrollo => Style::default().fg(Color::Rgb(190, 140, 255)),
        Estado::Completado => Style::default().fg(Color::Rgb(100, 255, 150)),
        Estado::Desconocido => Style::default().fg(Color::Rgb(100, 200, 255)),
    }
}
