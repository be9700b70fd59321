//! Submission validation.
//!
//! [`validate`] checks the rules in a fixed order and stops at the first
//! failure. Each [`Violation`] except [`Violation::MissingField`] carries its
//! own notification; the caller adds the generic "incomplete form" one.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{
    draft::{Field, RegistrationDraft, UF_CODES},
    normalize::digits,
    notify::Notification,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// `[0-9]` rather than `\d`, which matches any Unicode digit in `regex`.
static CPF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("valid regex"));

const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 99;

/// First rule a draft breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("missing required field: {0}")]
    MissingField(Field),
    #[error("role \"Outros\" requires a description")]
    RoleOtherMissing,
    #[error("invalid email")]
    InvalidEmail,
    #[error("cpf must have 11 digits")]
    CpfLength,
    #[error("cpf must be digits only")]
    CpfFormat,
    #[error("invalid residence state")]
    InvalidResidenceState,
    #[error("invalid training state")]
    InvalidTrainingState,
    #[error("age must be between 1 and 99")]
    AgeOutOfRange,
    #[error("phone must have 11 digits")]
    InvalidPhone,
}

impl Violation {
    /// Rule-specific message for the user, if the rule has one.
    pub fn notification(&self) -> Option<Notification> {
        let (title, message) = match self {
            Self::MissingField(_) => return None,
            Self::RoleOtherMissing => ("Campo Obrigatório", "Por favor, especifique sua função."),
            Self::InvalidEmail => (
                "Email Inválido",
                "Digite um email válido no formato: seu@email.com",
            ),
            Self::CpfLength => ("CPF Inválido", "O CPF deve conter exatamente 11 dígitos."),
            Self::CpfFormat => ("CPF Inválido", "Digite o CPF no formato XXX.XXX.XXX-XX"),
            Self::InvalidResidenceState => (
                "UF Inválida",
                "Selecione um estado válido para a residência.",
            ),
            Self::InvalidTrainingState => (
                "UF Inválida",
                "Selecione um estado válido para o treinamento.",
            ),
            Self::AgeOutOfRange => ("Idade Inválida", "A idade deve estar entre 1 e 99 anos."),
            Self::InvalidPhone => (
                "Telefone Inválido",
                "Digite o telefone no formato (XX)XXXXX-XXXX com 11 dígitos.",
            ),
        };
        Some(Notification::destructive(title, message))
    }
}

/// Accepts or rejects a complete draft.
pub fn validate(draft: &RegistrationDraft) -> Result<(), Violation> {
    if let Some(field) = Field::REQUIRED
        .iter()
        .find(|field| draft.get(**field).is_empty())
    {
        return Err(Violation::MissingField(*field));
    }

    if draft.wants_role_other() && draft.role_other.trim().is_empty() {
        return Err(Violation::RoleOtherMissing);
    }

    if !is_valid_email(&draft.email) {
        return Err(Violation::InvalidEmail);
    }

    let cpf = digits(&draft.cpf);
    if cpf.len() != 11 {
        return Err(Violation::CpfLength);
    }
    if !CPF_RE.is_match(&cpf) {
        return Err(Violation::CpfFormat);
    }

    if !is_valid_uf(&draft.residence_state) {
        return Err(Violation::InvalidResidenceState);
    }
    if !is_valid_uf(&draft.training_state) {
        return Err(Violation::InvalidTrainingState);
    }

    let age_ok = !draft.age.trim().is_empty()
        && parse_age(&draft.age).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age));
    if !age_ok {
        return Err(Violation::AgeOutOfRange);
    }

    if digits(&draft.phone).len() != 11 {
        return Err(Violation::InvalidPhone);
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_uf(code: &str) -> bool {
    UF_CODES.contains(&code)
}

/// Integer prefix of `raw`, the way a browser's `parseInt` reads it: leading
/// whitespace and one sign are allowed, parsing stops at the first non-digit.
/// `None` when no digit is found. Saturates instead of overflowing.
pub fn parse_age(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: Option<i64> = None;
    for ch in rest.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        let current = value.unwrap_or(0);
        value = Some(current.saturating_mul(10).saturating_add(i64::from(digit)));
    }

    value.map(|v| if negative { -v } else { v })
}
