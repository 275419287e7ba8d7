// ============================================================================
// FORMAT - Helpers de texto compartidos por tarjetas, popups y resúmenes
// ============================================================================

/// Porcentaje sin ceros sobrantes: 85.0 → "85", 12.50 → "12.5"
pub fn format_fill(fill_level: f64) -> String {
    if !fill_level.is_finite() {
        return "N/A".to_string();
    }
    let rounded = (fill_level * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escapa texto que termina dentro de HTML (popups de Leaflet)
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Ancho de la barra de llenado, acotado a 0-100
pub fn bar_width(fill_level: f64) -> f64 {
    if fill_level.is_finite() {
        fill_level.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
