use super::*;

#[test]
fn preview_keeps_short_text() {
    assert_eq!(preview("Bad Gateway", 100), "Bad Gateway");
}

#[test]
fn preview_cuts_at_limit() {
    let body = "x".repeat(250);
    assert_eq!(preview(&body, 100).len(), 100);
}

#[test]
fn preview_counts_characters_not_bytes() {
    assert_eq!(preview("héllo wörld", 5), "héllo");
}

#[test]
fn preview_of_exact_length_is_unchanged() {
    assert_eq!(preview("abc", 3), "abc");
}

#[test]
fn file_size_renders_two_decimals() {
    assert_eq!(format_file_size(2048), "2.00 KB");
    assert_eq!(format_file_size(1536), "1.50 KB");
    assert_eq!(format_file_size(0), "0.00 KB");
}

#[test]
fn file_size_rounds_small_values() {
    assert_eq!(format_file_size(100), "0.10 KB");
}
