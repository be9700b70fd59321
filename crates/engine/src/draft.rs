//! The module contains the in-progress registration state.
//!
//! A [`RegistrationDraft`] keeps every value as display text, exactly as the
//! form shows it (masked CPF and phone included). Values are only demasked
//! when the draft is mapped to a [`PersistedRecord`].
//!
//!  [`PersistedRecord`]: super::record::PersistedRecord
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role value that makes [`Field::RoleOther`] mandatory.
pub const ROLE_OTHER: &str = "Outros";

/// The 27 Brazilian federative units (26 states plus the federal district).
pub const UF_CODES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Selectable value for a choice field: stored value and display label.
pub type Choice = (&'static str, &'static str);

pub const EDUCATION_LEVELS: [Choice; 7] = [
    ("fundamental-incompleto", "Fundamental Incompleto"),
    ("fundamental-completo", "Fundamental Completo"),
    ("ensino-medio-incompleto", "Ensino Médio Incompleto"),
    ("ensino-medio-completo", "Ensino Médio Completo"),
    ("ensino-tecnico", "Ensino Técnico"),
    ("superior-incompleto", "Superior Incompleto"),
    ("superior-completo", "Superior Completo"),
];

pub const ROLES: [Choice; 6] = [
    ("lider-percebido", "Líder Percebido"),
    ("encarregado", "Encarregado"),
    ("supervisor", "Supervisor"),
    ("gerente", "Gerente"),
    ("diretor", "Diretor"),
    (ROLE_OTHER, "Outros"),
];

pub const EMOTIONAL_STATES: [Choice; 3] = [
    ("triste", "Triste"),
    ("normal", "Normal"),
    ("alegre", "Alegre"),
];

const UF_CHOICES: [Choice; 27] = {
    let mut choices = [("", ""); 27];
    let mut i = 0;
    while i < UF_CODES.len() {
        choices[i] = (UF_CODES[i], UF_CODES[i]);
        i += 1;
    }
    choices
};

/// A single input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Cpf,
    Phone,
    Age,
    ResidenceCity,
    ResidenceState,
    EducationLevel,
    Role,
    RoleOther,
    Employer,
    TrainingCity,
    TrainingState,
    EmotionalState,
}

impl Field {
    /// Every field, in the order the form displays them.
    pub const ALL: [Field; 14] = [
        Field::FullName,
        Field::Age,
        Field::ResidenceState,
        Field::Phone,
        Field::Email,
        Field::Cpf,
        Field::ResidenceCity,
        Field::Employer,
        Field::TrainingCity,
        Field::TrainingState,
        Field::EducationLevel,
        Field::Role,
        Field::RoleOther,
        Field::EmotionalState,
    ];

    /// Fields that must be non-empty at submit time, in the order they are
    /// checked. [`Field::RoleOther`] is conditional and not listed.
    pub const REQUIRED: [Field; 13] = [
        Field::FullName,
        Field::Age,
        Field::ResidenceState,
        Field::Phone,
        Field::Email,
        Field::Cpf,
        Field::ResidenceCity,
        Field::Employer,
        Field::TrainingCity,
        Field::TrainingState,
        Field::EducationLevel,
        Field::Role,
        Field::EmotionalState,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Nome Completo",
            Self::Email => "Qual seu melhor email?",
            Self::Cpf => "CPF",
            Self::Phone => "Telefone",
            Self::Age => "Idade",
            Self::ResidenceCity => "Cidade de sua residência",
            Self::ResidenceState => "UF",
            Self::EducationLevel => "Escolaridade",
            Self::Role => "Função",
            Self::RoleOther => "Especifique sua função",
            Self::Employer => "Empresa onde trabalha",
            Self::TrainingCity => "Cidade onde está realizando o treinamento",
            Self::TrainingState => "Estado onde está realizando o treinamento",
            Self::EmotionalState => "Estado Emocional",
        }
    }

    /// Options for fields rendered as a select, `None` for free text.
    pub fn options(self) -> Option<&'static [Choice]> {
        match self {
            Self::ResidenceState | Self::TrainingState => Some(&UF_CHOICES),
            Self::EducationLevel => Some(&EDUCATION_LEVELS),
            Self::Role => Some(&ROLES),
            Self::EmotionalState => Some(&EMOTIONAL_STATES),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        self != Self::RoleOther
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form state as entered by the user.
///
/// Keys use the form's camelCase names when (de)serialized; missing keys
/// default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationDraft {
    #[serde(alias = "nomeCompleto")]
    pub full_name: String,
    pub email: String,
    pub cpf: String,
    #[serde(alias = "telefone")]
    pub phone: String,
    #[serde(alias = "idade")]
    pub age: String,
    #[serde(alias = "cidadeResidencia")]
    pub residence_city: String,
    #[serde(alias = "uf", alias = "estadoResidencia")]
    pub residence_state: String,
    #[serde(alias = "escolaridade")]
    pub education_level: String,
    #[serde(alias = "funcao")]
    pub role: String,
    #[serde(alias = "funcaoOutros")]
    pub role_other: String,
    #[serde(alias = "empresa")]
    pub employer: String,
    #[serde(alias = "cidadeTreinamento")]
    pub training_city: String,
    #[serde(alias = "estadoTreinamento")]
    pub training_state: String,
    #[serde(alias = "estadoEmocional")]
    pub emotional_state: String,
}

impl RegistrationDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Cpf => &self.cpf,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::ResidenceCity => &self.residence_city,
            Field::ResidenceState => &self.residence_state,
            Field::EducationLevel => &self.education_level,
            Field::Role => &self.role,
            Field::RoleOther => &self.role_other,
            Field::Employer => &self.employer,
            Field::TrainingCity => &self.training_city,
            Field::TrainingState => &self.training_state,
            Field::EmotionalState => &self.emotional_state,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Cpf => &mut self.cpf,
            Field::Phone => &mut self.phone,
            Field::Age => &mut self.age,
            Field::ResidenceCity => &mut self.residence_city,
            Field::ResidenceState => &mut self.residence_state,
            Field::EducationLevel => &mut self.education_level,
            Field::Role => &mut self.role,
            Field::RoleOther => &mut self.role_other,
            Field::Employer => &mut self.employer,
            Field::TrainingCity => &mut self.training_city,
            Field::TrainingState => &mut self.training_state,
            Field::EmotionalState => &mut self.emotional_state,
        }
    }

    /// Whether the free-text role is currently asked for.
    pub fn wants_role_other(&self) -> bool {
        self.role == ROLE_OTHER
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
