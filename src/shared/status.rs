/// Localized label for a character status. Unknown values pass through.
pub fn translate_status(status: &str) -> &str {
    match status {
        "Alive" => "Vivo",
        "Dead" => "Morto",
        "unknown" => "Desconhecido",
        other => other,
    }
}
