//! Input Validation
//!
//! Untrusted input enters the quiz in one place: the nickname field. The
//! validator sanitises it the way a bounded text input would, so the rest
//! of the core only ever sees clean values.

/// Default maximum nickname length, in characters
pub const DEFAULT_NICKNAME_MAX_CHARS: usize = 10;

/// Whether a nickname has nothing but whitespace in it
#[must_use]
pub fn is_blank_nickname(nickname: &str) -> bool {
    nickname.trim().is_empty()
}

/// Outcome of validating one piece of input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    /// Input is acceptable as-is
    Valid,
    /// Input is not acceptable; reason given
    Invalid(String),
}

impl ValidationResult {
    /// Whether the input passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validator for user-supplied text
#[derive(Clone, Debug)]
pub struct InputValidator {
    nickname_max_chars: usize,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(DEFAULT_NICKNAME_MAX_CHARS)
    }
}

impl InputValidator {
    /// Create a validator with the given nickname limit
    #[must_use]
    pub fn new(nickname_max_chars: usize) -> Self {
        Self { nickname_max_chars }
    }

    /// Maximum nickname length in characters
    #[must_use]
    pub fn nickname_max_chars(&self) -> usize {
        self.nickname_max_chars
    }

    /// Clean a raw nickname: drop control characters and cut to the limit
    ///
    /// Mirrors a bounded text field: characters past the limit are simply
    /// not accepted.
    #[must_use]
    pub fn sanitize_nickname(&self, raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_control())
            .take(self.nickname_max_chars)
            .collect()
    }

    /// Check whether a nickname allows the quiz to start
    #[must_use]
    pub fn validate_nickname(&self, nickname: &str) -> ValidationResult {
        if is_blank_nickname(nickname) {
            return ValidationResult::Invalid("Nickname is empty".to_string());
        }

        let chars = nickname.chars().count();
        if chars > self.nickname_max_chars {
            return ValidationResult::Invalid(format!(
                "Nickname too long: {chars} characters (max: {})",
                self.nickname_max_chars
            ));
        }

        if nickname.chars().any(char::is_control) {
            return ValidationResult::Invalid(
                "Nickname contains invalid control characters".to_string(),
            );
        }

        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_by_characters() {
        let v = InputValidator::new(3);
        assert_eq!(v.sanitize_nickname("abcdef"), "abc");
        assert_eq!(v.sanitize_nickname("魔術師さん"), "魔術師");
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        let v = InputValidator::default();
        assert_eq!(v.sanitize_nickname("ne\u{7}o\n"), "neo");
    }

    #[test]
    fn test_blank_nickname_is_invalid() {
        let v = InputValidator::default();
        assert!(!v.validate_nickname("").is_valid());
        assert!(!v.validate_nickname("   ").is_valid());
        assert!(v.validate_nickname(" neo ").is_valid());
    }

    #[test]
    fn test_is_blank_nickname() {
        assert!(is_blank_nickname(""));
        assert!(is_blank_nickname(" \t "));
        assert!(!is_blank_nickname(" n "));
    }

    #[test]
    fn test_overlong_nickname_is_invalid() {
        let v = InputValidator::new(4);
        assert_eq!(
            v.validate_nickname("trinity"),
            ValidationResult::Invalid("Nickname too long: 7 characters (max: 4)".to_string())
        );
    }
}
