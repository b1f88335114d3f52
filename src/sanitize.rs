/// Strips a text field down to what the completeness service accepts:
/// non-ASCII characters are dropped, then every backslash and double quote
/// is removed.
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii() && c != '\\' && c != '"' {
            result.push(c);
        }
    }

    result
}
