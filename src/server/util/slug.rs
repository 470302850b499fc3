/// Converts `value` into a URL slug.
///
/// Lowercases the input, drops every character that is not an ASCII letter, digit,
/// whitespace, hyphen or underscore, collapses runs of whitespace and hyphens into a
/// single hyphen, then trims leading and trailing hyphens and underscores.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in value.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Whether `value` only contains ASCII letters, digits, hyphens and underscores.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
