//! CPF (Brazilian national ID number) validation
//!
//! A CPF is eleven digits written as `DDD.DDD.DDD-DD`. The last two digits
//! are check digits computed from the ones before them with a weighted sum
//! modulo 11.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static DOCUMENT_FORMAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").unwrap());

// Nine-digit base, plain or dotted
static DOCUMENT_BASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{9}|[0-9]{3}\.[0-9]{3}\.[0-9]{3})$").unwrap());

/// Validates a CPF written as `DDD.DDD.DDD-DD`.
///
/// Both the layout and the two check digits are strict. Sequences made of a
/// single repeated digit (`000.000.000-00`, `111.111.111-11`, ...) are
/// reserved and always rejected, even though every one of them except the
/// all-zero sequence satisfies the check digit arithmetic.
///
/// # Examples
/// ```
/// use cadastro_validation::is_valid_document;
/// assert!(is_valid_document("123.456.789-09"));
/// assert!(!is_valid_document("123.456.789-00"));
/// assert!(!is_valid_document("12345678909"));
/// ```
pub fn is_valid_document(raw: &str) -> bool {
    if !DOCUMENT_FORMAT_REGEX.is_match(raw) {
        trace!("document rejected: layout");
        return false;
    }

    let Some(digits) = parse_digits(raw) else {
        return false;
    };

    if is_reserved(&digits) {
        trace!("document rejected: reserved sequence");
        return false;
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let [first, second] = check_digits(&base);

    if first != digits[9] {
        trace!("document rejected: first check digit");
        return false;
    }
    if second != digits[10] {
        trace!("document rejected: second check digit");
        return false;
    }

    true
}

/// Computes the two check digits for a nine-digit CPF base.
///
/// ```
/// use cadastro_validation::check_digits;
/// assert_eq!(check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), [0, 9]);
/// ```
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = check_digit(&extended);

    [first, second]
}

/// Renders eleven digits in the `DDD.DDD.DDD-DD` layout.
pub fn format_document(digits: &[u8; 11]) -> String {
    let mut out = String::with_capacity(14);
    for (i, digit) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(char::from(b'0' + digit % 10));
    }
    out
}

/// Completes a nine-digit base (plain `DDDDDDDDD` or `DDD.DDD.DDD`) into a
/// formatted CPF with its check digits.
///
/// Returns `None` for any other layout or when the base would produce a
/// reserved sequence.
pub fn complete_document(base: &str) -> Option<String> {
    if !DOCUMENT_BASE_REGEX.is_match(base) {
        return None;
    }

    let mut digits = [0u8; 11];
    for (slot, b) in digits.iter_mut().zip(base.bytes().filter(u8::is_ascii_digit)) {
        *slot = b - b'0';
    }

    let mut nine = [0u8; 9];
    nine.copy_from_slice(&digits[..9]);
    let [first, second] = check_digits(&nine);
    digits[9] = first;
    digits[10] = second;

    (!is_reserved(&digits)).then(|| format_document(&digits))
}

// Weights run from len + 1 down to 2; 10 folds to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rest => rest as u8,
    }
}

fn parse_digits(raw: &str) -> Option<[u8; 11]> {
    let mut digits = [0u8; 11];
    let mut count = 0;
    for b in raw.bytes().filter(u8::is_ascii_digit) {
        *digits.get_mut(count)? = b - b'0';
        count += 1;
    }
    (count == 11).then_some(digits)
}

fn is_reserved(digits: &[u8; 11]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_documents() {
        assert!(is_valid_document("123.456.789-09"));
        assert!(is_valid_document("529.982.247-25"));
        assert!(is_valid_document("111.444.777-35"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!is_valid_document("123.456.789-00"));
        assert!(!is_valid_document("123.456.789-08"));
        assert!(!is_valid_document("529.982.247-24"));
    }

    #[test]
    fn test_reserved_sequences() {
        assert!(!is_valid_document("000.000.000-00"));
        assert!(!is_valid_document("111.111.111-11"));
        assert!(!is_valid_document("999.999.999-99"));
    }

    #[test]
    fn test_uniform_sequences_pass_the_arithmetic() {
        // the reserved check is what rejects these, not the checksum
        for d in 1..=9u8 {
            assert_eq!(check_digits(&[d; 9]), [d, d]);
        }
    }

    #[test]
    fn test_layout_is_strict() {
        assert!(!is_valid_document("12345678909"));
        assert!(!is_valid_document("123.456.78909"));
        assert!(!is_valid_document("123-456-789.09"));
        assert!(!is_valid_document(" 123.456.789-09"));
        assert!(!is_valid_document("123.456.789-09\n"));
        assert!(!is_valid_document("123.456.789-9"));
        assert!(!is_valid_document(""));
    }

    #[test]
    fn test_check_digit_folds_ten_to_zero() {
        // 1*10+2*9+...+9*2 = 210; 2100 % 11 = 10
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
    }

    #[test]
    fn test_format_document() {
        assert_eq!(
            format_document(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9]),
            "123.456.789-09"
        );
    }

    #[test]
    fn test_complete_document() {
        assert_eq!(complete_document("123456789").as_deref(), Some("123.456.789-09"));
        assert_eq!(complete_document("529.982.247").as_deref(), Some("529.982.247-25"));

        assert_eq!(complete_document("12345678"), None);
        assert_eq!(complete_document("12345678a"), None);
        assert_eq!(complete_document("111111111"), None);
    }

    #[test]
    fn test_complete_document_accepts_only_two_layouts() {
        assert_eq!(complete_document("1.2.3.4.5.6.7.8.9"), None);
        assert_eq!(complete_document("123456.789"), None);
        assert_eq!(complete_document("123.456.789."), None);
        assert_eq!(complete_document("123.456.789").as_deref(), Some("123.456.789-09"));
    }

    #[test]
    fn test_completed_documents_validate() {
        for base in ["000000001", "987654321", "314159265", "271828182"] {
            let cpf = complete_document(base).unwrap();
            assert!(is_valid_document(&cpf), "{cpf} should validate");
        }
    }
}
