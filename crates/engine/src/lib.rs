//! Core of the "Cadastro Alunos" registration form.
//!
//! The crate holds everything a front end needs except rendering:
//!
//! - [`RegistrationDraft`] and [`Field`]: the form state;
//! - [`normalize`]: per-keystroke masking (CPF, phone, age, UF);
//! - [`validate`]: the ordered submit rules;
//! - [`PersistedRecord`]: the mapped row handed to a [`DataSink`];
//! - [`FormController`]: the submit state machine tying them together.
//!
//! [`SeaOrmSink`] stores records through sea-orm; notifications and the
//! success dialog are left to the front end through [`NotificationSink`] and
//! [`SuccessDialog`].

pub use controller::{FormController, Phase, SubmitOutcome};
pub use draft::{Choice, Field, ROLE_OTHER, RegistrationDraft, UF_CODES};
pub use error::EngineError;
pub use normalize::{digits, normalize};
pub use notify::{Notification, NotificationSink, Severity, SuccessDialog};
pub use record::PersistedRecord;
pub use sink::{DataSink, SeaOrmSink};
pub use validate::{Violation, is_valid_email, is_valid_uf, parse_age, validate};

pub mod draft;
pub mod normalize;
pub mod record;

mod controller;
mod error;
mod notify;
mod sink;
mod validate;

type ResultEngine<T> = Result<T, EngineError>;
