//! Field validators that record failures into a [`ValidationErrors`] set.

use url::Url;

use crate::server::error::validation::ValidationErrors;

/// Default maximum length of a stored URL.
pub const URL_MAX_LENGTH: usize = 200;

pub const BLANK: &str = "This field may not be blank.";

/// Rejects blank values and values longer than `max_len` characters.
pub fn text(errors: &mut ValidationErrors, field: &str, value: &str, max_len: Option<usize>) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
        return;
    }
    max_length(errors, field, value, max_len);
}

/// Only enforces the length limit; blank values are allowed.
pub fn max_length(errors: &mut ValidationErrors, field: &str, value: &str, max_len: Option<usize>) {
    if let Some(max) = max_len {
        if value.chars().count() > max {
            errors.add(
                field,
                format!("Ensure this field has no more than {} characters.", max),
            );
        }
    }
}

/// Requires an absolute `http` or `https` URL with a host.
pub fn url(errors: &mut ValidationErrors, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
        return;
    }

    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false);

    if !valid {
        errors.add(field, "Enter a valid URL.");
        return;
    }
    max_length(errors, field, value, Some(max_len));
}

/// Validates an optional URL. `None` is always accepted.
pub fn optional_url(errors: &mut ValidationErrors, field: &str, value: Option<&str>, max_len: usize) {
    if let Some(value) = value {
        url(errors, field, value, max_len);
    }
}

/// Loose e-mail check: one `@`, a non-empty local part, and a dotted domain.
pub fn email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
        return;
    }
    if !is_valid_email(value) {
        errors.add(field, "Enter a valid email address.");
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

/// Usernames are at most 150 characters of letters, digits and `@.+-_`.
pub fn username(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.add(field, BLANK);
        return;
    }
    if value.chars().count() > 150 {
        errors.add(field, "Ensure this field has no more than 150 characters.");
    }
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        errors.add(
            field,
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        );
    }
}
