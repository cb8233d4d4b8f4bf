/// Glyph drawn for unknown symbol names.
pub const DEFAULT_GLYPH: char = '●';

/// Name of the symbol the uniform marker renderer draws.
pub const DEFAULT_SYMBOL: &str = "circle";

/// Marker glyph for a symbol name, falling back to [`DEFAULT_GLYPH`].
pub fn glyph_for(name: &str) -> char {
    match name {
        "circle" => '●',
        "circle-open" => '○',
        "square" => '■',
        "square-open" => '□',
        "diamond" => '◆',
        "diamond-open" => '◇',
        "cross" => '+',
        "x" => '❌',
        "triangle-up" => '▲',
        "triangle-down" => '▼',
        "triangle-left" => '◀',
        "triangle-right" => '▶',
        "star" => '★',
        "star-open" => '☆',
        _ => DEFAULT_GLYPH,
    }
}
