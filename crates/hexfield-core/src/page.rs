//! Pure helpers behind the landing-page copy button.

/// Strip an optional `LABEL:` prefix and every whitespace character.
///
/// `"CA: ABC123"` becomes `"ABC123"`.
pub fn sanitize_address(text: &str) -> String {
    let value = match text.split_once(':') {
        Some((_, rest)) => rest,
        None => text,
    };
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
