//! User-facing collaborators of the form: notifications and the success
//! dialog.

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Destructive)
    }

    /// Shown for every rejected submission, whatever rule failed.
    pub fn incomplete_form() -> Self {
        Self::destructive(
            "Formulário Incompleto",
            "Por favor, preencha todos os campos obrigatórios.",
        )
    }

    /// Shown for every persistence failure, whatever the sink reported.
    pub fn submit_failed() -> Self {
        Self::destructive(
            "Erro ao Enviar",
            "Ocorreu um erro ao enviar o formulário. Tente novamente.",
        )
    }
}

/// Displays messages to the user. Fire and forget.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// The dialog opened after a registration is stored.
pub trait SuccessDialog {
    fn set_open(&mut self, open: bool);
}
