use ratatui::{
    style::Style,
    text::{Line, Span},
};

// Layout constants
pub const BORDER_PADDING: u16 = 4; // Total horizontal padding from borders (2 per side)

/// Spanish month abbreviations, fixed so the output never depends on
/// the process locale.
const MESES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Format a timestamp for display, e.g. "12 ago 2025 09:30"
pub fn format_fecha(fecha: &chrono::DateTime<chrono::Utc>) -> String {
    use chrono::{Datelike, Timelike};
    format!(
        "{:02} {} {} {:02}:{:02}",
        fecha.day(),
        MESES[fecha.month0() as usize],
        fecha.year(),
        fecha.hour(),
        fecha.minute()
    )
}

/// Wrap free text into styled lines for a bordered area
pub fn wrap_texto(contenido: &str, max_width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = vec![];

    for line in contenido.lines() {
        let wrapped = textwrap::wrap(line, max_width.max(1));
        for wrapped_line in wrapped {
            lines.push(Line::from(Span::styled(wrapped_line.to_string(), style)));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_fecha_is_deterministic_spanish() {
        let fecha = chrono::Utc.with_ymd_and_hms(2025, 8, 12, 9, 5, 0).unwrap();
        assert_eq!(format_fecha(&fecha), "12 ago 2025 09:05");

        let enero = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(format_fecha(&enero), "01 ene 2024 23:59");

        let diciembre = chrono::Utc
            .with_ymd_and_hms(2023, 12, 31, 0, 0, 0)
            .unwrap();
        assert_eq!(format_fecha(&diciembre), "31 dic 2023 00:00");
    }

    #[test]
    fn wrap_texto_never_returns_empty() {
        let lines = wrap_texto("", 40, Style::default());
        assert_eq!(lines.len(), 1);
    }
}
