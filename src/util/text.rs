//! Small text formatting helpers for rendered values.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Byte count rendered in kibibytes with two decimals, e.g. `2.00 KB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
