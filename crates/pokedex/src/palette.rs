//! Type colours shared by the TUI and the plain CLI output

/// RGB colour for a Pokémon type, `None` for types we don't know
pub fn type_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name {
        "normal" => (0xA8, 0xA8, 0x78),
        "fire" => (0xF0, 0x80, 0x30),
        "water" => (0x68, 0x90, 0xF0),
        "electric" => (0xF8, 0xD0, 0x30),
        "grass" => (0x78, 0xC8, 0x50),
        "ice" => (0x98, 0xD8, 0xD8),
        "fighting" => (0xC0, 0x30, 0x28),
        "poison" => (0xA0, 0x40, 0xA0),
        "ground" => (0xE0, 0xC0, 0x68),
        "flying" => (0xA8, 0x90, 0xF0),
        "psychic" => (0xF8, 0x58, 0x88),
        "bug" => (0xA8, 0xB8, 0x20),
        "rock" => (0xB8, 0xA0, 0x38),
        "ghost" => (0x70, 0x58, 0x98),
        "dragon" => (0x70, 0x38, 0xF8),
        "dark" => (0x70, 0x58, 0x48),
        "steel" => (0xB8, 0xB8, 0xD0),
        "fairy" => (0xEE, 0x99, 0xAC),
        _ => return None,
    };
    Some(rgb)
}

pub fn to_ratatui(name: Option<&str>) -> ratatui::style::Color {
    use ratatui::style::Color;
    match name.and_then(type_rgb) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::White,
    }
}

/// `name` coloured for terminal output
pub fn paint(name: &str) -> colored::ColoredString {
    use colored::Colorize;
    match type_rgb(name) {
        Some((r, g, b)) => name.truecolor(r, g, b),
        None => name.normal(),
    }
}
