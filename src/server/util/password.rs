//! Password hashing and strength policy.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

pub const MIN_LENGTH: usize = 8;

/// Similarity ratio at or above which a password is considered derived from user data.
const MAX_SIMILARITY: f64 = 0.7;

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "123456789", "12345678", "password", "qwerty", "qwerty123", "1q2w3e4r",
    "1234567890", "111111", "123123", "abc123", "password1", "password123", "iloveyou",
    "1qaz2wsx", "qwertyuiop", "000000", "dragon", "sunshine", "princess", "letmein",
    "monkey", "football", "baseball", "welcome", "welcome1", "admin123", "administrator",
    "passw0rd", "master", "shadow", "superman", "batman", "trustno1", "starwars",
    "whatever", "freedom", "zaq12wsx", "asdfghjkl", "michael", "jennifer", "charlie",
    "computer", "internet", "qazwsx123", "11111111", "12341234", "87654321", "changeme",
    "secret123", "pokemon", "naruto123", "anime123", "onepiece", "sasuke123", "pikachu",
    "loveyou1", "hello123", "mustang", "access14",
];

/// Hashes `password` into an Argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashErr(e.to_string()))
}

/// Checks `password` against a stored PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Returns every policy violation of `password`; an empty list means it is acceptable.
///
/// The password must be at least [`MIN_LENGTH`] characters, not entirely numeric, not a
/// well-known password, and not too similar to the username or e-mail address.
pub fn policy_violations(password: &str, username: &str, email: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let lowered = password.to_lowercase();

    for (value, label) in [(username, "username"), (email, "email address")] {
        if is_too_similar(&lowered, value) {
            violations.push(format!("The password is too similar to the {}.", label));
            break;
        }
    }

    if password.chars().count() < MIN_LENGTH {
        violations.push(format!(
            "This password is too short. It must contain at least {} characters.",
            MIN_LENGTH
        ));
    }

    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        violations.push("This password is too common.".to_string());
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        violations.push("This password is entirely numeric.".to_string());
    }

    violations
}

/// Compares the password with the attribute value and each of its word parts.
fn is_too_similar(password: &str, value: &str) -> bool {
    let value = value.to_lowercase();
    if value.is_empty() {
        return false;
    }

    std::iter::once(value.as_str())
        .chain(value.split(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|part| !part.is_empty())
        .any(|part| similarity(password, part) >= MAX_SIMILARITY)
}

/// Ratio `2 * M / T` where `M` counts characters in matching blocks and `T` is the
/// combined length, matching blocks being found by repeatedly taking the longest
/// common substring and recursing on either side.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_substring(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        let mut current = vec![0usize; b.len() + 1];
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                current[j] = previous[j - 1] + 1;
                if current[j] > best.2 {
                    best = (i - current[j], j - current[j], current[j]);
                }
            }
        }
        previous = current;
    }

    best
}
