pub mod url_validator;

pub const CODE_MIN_LEN: usize = 6;
pub const CODE_MAX_LEN: usize = 8;

/// Fixed route prefixes a custom code must never shadow. All of them are
/// shorter than `CODE_MIN_LEN`, so the length rule already excludes them,
/// but the list keeps the collision rule explicit.
pub const RESERVED_CODES: &[&str] = &["api", "code", "healthz"];

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// A valid code is 6-8 characters, all from `[A-Za-z0-9]`, and not reserved.
pub fn validate_code(code: &str) -> crate::errors::Result<()> {
    use crate::errors::LinkletError;

    if code.len() < CODE_MIN_LEN || code.len() > CODE_MAX_LEN {
        return Err(LinkletError::validation(format!(
            "Code must be {}-{} characters, got {}",
            CODE_MIN_LEN,
            CODE_MAX_LEN,
            code.len()
        )));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(LinkletError::validation(
            "Code may only contain letters and digits",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(LinkletError::validation(format!(
            "Code '{}' is reserved",
            code
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_random_code_length() {
        assert_eq!(generate_random_code(6).len(), 6);
        assert_eq!(generate_random_code(8).len(), 8);
        assert_eq!(generate_random_code(0).len(), 0);
    }

    #[test]
    fn test_generate_random_code_characters() {
        let code = generate_random_code(100);
        for ch in code.chars() {
            assert!(ch.is_ascii_alphanumeric(), "Invalid character: {}", ch);
        }
    }

    #[test]
    fn test_generate_random_code_uniqueness() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_random_code(8));
        }

        assert!(
            codes.len() > 990,
            "Generated codes lack sufficient randomness"
        );
    }

    #[test]
    fn test_validate_code_accepts_valid() {
        assert!(validate_code("abc123").is_ok());
        assert!(validate_code("ABCdef12").is_ok());
        assert!(validate_code("0000000").is_ok());
    }

    #[test]
    fn test_validate_code_length_bounds() {
        assert!(validate_code("").is_err());
        assert!(validate_code("abc12").is_err());
        assert!(validate_code("abc123456").is_err());
    }

    #[test]
    fn test_validate_code_rejects_non_alphanumeric() {
        assert!(validate_code("abc-12").is_err());
        assert!(validate_code("abc 12").is_err());
        assert!(validate_code("abc12é").is_err());
        assert!(validate_code("../../..").is_err());
    }

    #[test]
    fn test_case_sensitivity_preserved() {
        // "abc123" and "ABC123" are distinct codes; both must validate.
        assert!(validate_code("abc123").is_ok());
        assert!(validate_code("ABC123").is_ok());
    }
}
