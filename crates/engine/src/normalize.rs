//! Per-keystroke normalization of raw input values.
//!
//! [`normalize`] is applied to the whole value of a field on every change. It
//! never fails and is idempotent: feeding its output back yields the same
//! string, so re-rendering or resetting the form never double-masks a value.

use crate::draft::Field;

const CPF_DIGITS: usize = 11;
const PHONE_DIGITS: usize = 11;
const AGE_DIGITS: usize = 2;
const UF_LEN: usize = 2;

/// Canonical stored representation of `raw` for `field`.
pub fn normalize(field: Field, raw: &str) -> String {
    match field {
        Field::Cpf => mask_cpf(raw),
        Field::Phone => mask_phone(raw),
        Field::Age => truncate(&digits(raw), AGE_DIGITS),
        Field::TrainingState => truncate(&raw.to_uppercase(), UF_LEN),
        _ => raw.to_string(),
    }
}

/// Keeps only ASCII digits.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Masks the first 11 digits of `raw` as `XXX.XXX.XXX-XX`, adding
/// punctuation only once the digit count passes 3, 6 and 9. Anything that is
/// not an ASCII digit is dropped first.
pub fn mask_cpf(raw: &str) -> String {
    let digits = truncate(&digits(raw), CPF_DIGITS);
    let len = digits.len();
    match len {
        0..=3 => digits.to_string(),
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Masks the first 11 digits of `raw` as `(XX)XXXXX-XXXX`: parentheses once
/// more than two digits are present, the dash once more than seven are.
/// Anything that is not an ASCII digit is dropped first.
pub fn mask_phone(raw: &str) -> String {
    let digits = truncate(&digits(raw), PHONE_DIGITS);
    let len = digits.len();
    match len {
        0..=2 => digits.to_string(),
        3..=7 => format!("({}){}", &digits[..2], &digits[2..]),
        _ => format!("({}){}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELEVEN: &str = "12345678901";

    #[test]
    fn cpf_masks_progressively() {
        assert_eq!(normalize(Field::Cpf, ""), "");
        assert_eq!(normalize(Field::Cpf, "123"), "123");
        assert_eq!(normalize(Field::Cpf, "1234"), "123.4");
        assert_eq!(normalize(Field::Cpf, "123456"), "123.456");
        assert_eq!(normalize(Field::Cpf, "1234567"), "123.456.7");
        assert_eq!(normalize(Field::Cpf, "123456789"), "123.456.789");
        assert_eq!(normalize(Field::Cpf, "1234567890"), "123.456.789-0");
        assert_eq!(normalize(Field::Cpf, ELEVEN), "123.456.789-01");
    }

    #[test]
    fn cpf_truncates_and_strips_garbage() {
        assert_eq!(normalize(Field::Cpf, "123.456.789-0123"), "123.456.789-01");
        assert_eq!(normalize(Field::Cpf, "abc"), "");
        assert_eq!(normalize(Field::Cpf, " 1a2b3c4 "), "123.4");
    }

    #[test]
    fn cpf_demasks_to_input_prefix_and_is_idempotent() {
        for len in 0..=ELEVEN.len() {
            let input = &ELEVEN[..len];
            let once = normalize(Field::Cpf, input);
            assert_eq!(digits(&once), input);
            assert_eq!(normalize(Field::Cpf, &once), once);
        }
    }

    #[test]
    fn phone_masks_after_thresholds() {
        assert_eq!(normalize(Field::Phone, "1"), "1");
        assert_eq!(normalize(Field::Phone, "11"), "11");
        assert_eq!(normalize(Field::Phone, "119"), "(11)9");
        assert_eq!(normalize(Field::Phone, "1198765"), "(11)98765");
        assert_eq!(normalize(Field::Phone, "11987654"), "(11)98765-4");
        assert_eq!(normalize(Field::Phone, "11987654321"), "(11)98765-4321");
        assert_eq!(normalize(Field::Phone, "(11) 98765-43219"), "(11)98765-4321");
    }

    #[test]
    fn phone_demasks_to_input_prefix_and_is_idempotent() {
        for len in 0..=ELEVEN.len() {
            let input = &ELEVEN[..len];
            let once = normalize(Field::Phone, input);
            assert_eq!(digits(&once), input);
            assert_eq!(normalize(Field::Phone, &once), once);
            assert_eq!(once.contains('('), len > 2);
            assert_eq!(once.contains('-'), len > 7);
        }
    }

    #[test]
    fn masks_skip_non_ascii_input() {
        assert_eq!(mask_cpf("ééé"), "");
        assert_eq!(mask_cpf("1é2é3é4"), "123.4");
        assert_eq!(mask_phone("€1"), "1");
        assert_eq!(mask_phone("€11€987654321"), "(11)98765-4321");
        assert_eq!(normalize(Field::Cpf, "١٢٣٤"), "");
        assert_eq!(normalize(Field::Phone, "(11) ９８"), "11");
    }

    #[test]
    fn age_keeps_two_digits() {
        assert_eq!(normalize(Field::Age, "150"), "15");
        assert_eq!(normalize(Field::Age, "4a2"), "42");
        assert_eq!(normalize(Field::Age, "-"), "");
    }

    #[test]
    fn training_state_uppercases_and_truncates() {
        assert_eq!(normalize(Field::TrainingState, "sp"), "SP");
        assert_eq!(normalize(Field::TrainingState, "rio"), "RI");
        assert_eq!(normalize(Field::TrainingState, "SP"), "SP");
    }

    #[test]
    fn other_fields_pass_through() {
        assert_eq!(normalize(Field::FullName, "  Ana Maria "), "  Ana Maria ");
        assert_eq!(normalize(Field::ResidenceState, "sp"), "sp");
        assert_eq!(normalize(Field::Email, "a@b.c"), "a@b.c");
    }
}
