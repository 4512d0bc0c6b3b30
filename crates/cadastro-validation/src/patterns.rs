// File: src/patterns.rs
// Purpose: Literal format predicates for each form field

use once_cell::sync::Lazy;
use regex::Regex;

// `\d` and `\s` are Unicode-aware in `regex`, so digit and whitespace classes
// are spelled out. WHITESPACE is the browser form's whitespace set.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Uppercase ASCII start, then 9+ letters, Latin-1 accented range or spaces
static PERSON_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z\x{C0}-\x{FF} ]{9,}$").unwrap());

static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]{7,}$").unwrap());

static LOGIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}$").unwrap());

static MOBILE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+55\([0-9]{2}\)[0-9]{5}-[0-9]{4}$").unwrap());

// Landline local numbers start with 2, 3, 4 or 5
static LANDLINE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+55\([0-9]{2}\)[2-5][0-9]{4}-[0-9]{4}$").unwrap());

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^(?i-u:rua|avenida|av\.|travessa)[{ws}]+[a-zA-Z0-9{ws}]{{10,}}$",
        ws = WHITESPACE
    );
    Regex::new(&pattern).unwrap()
});

/// Full name: capital first letter, at least 10 characters of letters and spaces
pub fn is_valid_full_name(value: &str) -> bool {
    PERSON_NAME_REGEX.is_match(value)
}

/// Maternal name follows the full name rule
pub fn is_valid_maternal_name(value: &str) -> bool {
    PERSON_NAME_REGEX.is_match(value)
}

/// Password: 7 or more ASCII letters and digits, nothing else
pub fn is_valid_password(value: &str) -> bool {
    PASSWORD_REGEX.is_match(value)
}

/// Login: exactly five uppercase ASCII letters
pub fn is_valid_login(value: &str) -> bool {
    LOGIN_REGEX.is_match(value)
}

/// Mobile phone in the `+55(DD)DDDDD-DDDD` layout
pub fn is_valid_mobile_phone(value: &str) -> bool {
    MOBILE_PHONE_REGEX.is_match(value)
}

/// Landline phone in the `+55(DD)NDDDD-DDDD` layout, N in 2..=5
pub fn is_valid_landline_phone(value: &str) -> bool {
    LANDLINE_PHONE_REGEX.is_match(value)
}

/// Address starting with `Rua`, `Avenida`, `Av.` or `Travessa` (any case),
/// whitespace, then at least 10 letters, digits or spaces.
pub fn is_valid_address(value: &str) -> bool {
    ADDRESS_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert!(is_valid_full_name("Maria Silva"));
        assert!(is_valid_full_name("João Conceição"));
        assert!(is_valid_full_name("Ana Beatriz"));

        assert!(!is_valid_full_name("maria silva"));
        assert!(!is_valid_full_name("Ana Li"));
        assert!(!is_valid_full_name("Ágata Souza")); // accented first letter is not A-Z
        assert!(!is_valid_full_name("Maria-Silva"));
        assert!(!is_valid_full_name("Maria Silva 2"));
        assert!(!is_valid_full_name(""));
    }

    #[test]
    fn test_full_name_length_boundary() {
        assert!(is_valid_full_name("Abcdefghij")); // exactly 10
        assert!(!is_valid_full_name("Abcdefghi")); // 9
    }

    #[test]
    fn test_name_accented_range_is_raw_interval() {
        // × (U+00D7) and ÷ (U+00F7) sit inside U+00C0..=U+00FF
        assert!(is_valid_full_name("Maria ×÷ Silva"));
        // ¿ (U+00BF) is just below it
        assert!(!is_valid_full_name("Maria ¿ Silva"));
    }

    #[test]
    fn test_name_rejects_trailing_newline() {
        assert!(!is_valid_full_name("Maria Silva\n"));
    }

    #[test]
    fn test_maternal_name_uses_same_rule() {
        assert!(is_valid_maternal_name("Helena Souza"));
        assert!(!is_valid_maternal_name("helena souza"));
    }

    #[test]
    fn test_password() {
        assert!(is_valid_password("abc1234"));
        assert!(is_valid_password("ABCDEFGHIJKLMNOP123"));

        assert!(!is_valid_password("abc123"));
        assert!(!is_valid_password("abc 1234"));
        assert!(!is_valid_password("abc_1234"));
        assert!(!is_valid_password("abcdéfg"));
    }

    #[test]
    fn test_login() {
        assert!(is_valid_login("ABCDE"));

        assert!(!is_valid_login("ABCD"));
        assert!(!is_valid_login("ABCDEF"));
        assert!(!is_valid_login("abcde"));
        assert!(!is_valid_login("ABCD1"));
        assert!(!is_valid_login("ABCDÉ"));
    }

    #[test]
    fn test_mobile_phone() {
        assert!(is_valid_mobile_phone("+55(21)99565-1622"));

        assert!(!is_valid_mobile_phone("+55(21)9956-1622"));
        assert!(!is_valid_mobile_phone("+55 (21) 99565-1622"));
        assert!(!is_valid_mobile_phone("+54(21)99565-1622"));
        assert!(!is_valid_mobile_phone("+55(21)99565-16222"));
        // Arabic-Indic digits are not ASCII digits
        assert!(!is_valid_mobile_phone("+55(٢١)99565-1622"));
    }

    #[test]
    fn test_landline_phone() {
        assert!(is_valid_landline_phone("+55(21)49565-1622"));
        assert!(is_valid_landline_phone("+55(11)23456-7890"));
        assert!(is_valid_landline_phone("+55(11)53456-7890"));

        assert!(!is_valid_landline_phone("+55(21)19565-1622"));
        assert!(!is_valid_landline_phone("+55(21)69565-1622"));
        assert!(!is_valid_landline_phone("+55(21)4956-1622"));
    }

    #[test]
    fn test_address() {
        assert!(is_valid_address("Rua Nome da Rua 123"));
        assert!(is_valid_address("Avenida Brasil 1500"));
        assert!(is_valid_address("Av. Paulista 1000"));
        assert!(is_valid_address("Travessa do Ouvidor 5"));
        assert!(is_valid_address("RUA das Flores 10"));
        assert!(is_valid_address("av. Atlantica 1702"));

        assert!(!is_valid_address("Alameda Santos 1000"));
        assert!(!is_valid_address("Rua Curta"));
        assert!(!is_valid_address("RuaSemEspaco 123"));
        assert!(!is_valid_address("Rua São João 123"));
        assert!(!is_valid_address("Rua das Flores, 10"));
    }

    #[test]
    fn test_address_separator_and_keyword_edges() {
        // U+FEFF is form whitespace, U+0085 is not
        assert!(is_valid_address("Rua\u{FEFF}abcdefghij"));
        assert!(!is_valid_address("Rua\u{85}abcdefghij"));
        // the long s does not fold to `s` in the keyword
        assert!(!is_valid_address("Travesſa do Ouvidor 5"));
    }

    #[test]
    fn test_address_whitespace_counts_toward_length() {
        // one separator space, then "abc" padded with spaces to 10 chars
        assert!(is_valid_address(&format!("Rua abc{}", " ".repeat(7))));
        assert!(!is_valid_address(&format!("Rua abc{}", " ".repeat(6))));
    }
}
