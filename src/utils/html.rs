// src/utils/html.rs

/// Escapes text for safe interpolation into HTML, attribute values included.
///
/// Vocabulary content comes from an external file, so anything placed into the
/// index page goes through here first.
pub fn escape_text(input: &str) -> String {
    ammonia::clean_text(input)
}

/// Renders `<option>` tags for the category picker.
pub fn category_options(categories: &[&str]) -> String {
    categories
        .iter()
        .map(|c| {
            let escaped = escape_text(c);
            format!("<option value=\"{escaped}\">{escaped}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
