//! Password obfuscation for the local user list.
//!
//! NOT SECURE. Passwords are Base64-encoded, which anyone with access to the
//! store can reverse. This stands in for a credential scheme and must be
//! replaced by a real password hash before the store holds anything that
//! matters.

use base64ct::{Base64, Encoding};
use lazy_static::lazy_static;
use regex::Regex;

pub fn obfuscate_password(plain: &str) -> String {
    Base64::encode_string(plain.as_bytes())
}

/// Compares by re-encoding; there is no hash to verify against.
pub fn password_matches(plain: &str, stored: &str) -> bool {
    obfuscate_password(plain) == stored
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obfuscation_is_plain_base64() {
        assert_eq!(obfuscate_password("secret"), "c2VjcmV0");
        let decoded = Base64::decode_vec(&obfuscate_password("p@ss wörd")).unwrap();
        assert_eq!(decoded, "p@ss wörd".as_bytes());
    }

    #[test]
    fn matches_only_the_same_password() {
        let stored = obfuscate_password("correct-horse");
        assert!(password_matches("correct-horse", &stored));
        assert!(!password_matches("Correct-horse", &stored));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email(""));
    }
}
