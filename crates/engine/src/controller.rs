//! The submission state machine.
//!
//! A [`FormController`] owns one draft and moves between [`Phase::Idle`] and
//! [`Phase::Submitting`]:
//!
//! - submit on an invalid draft: notify, stay idle, nothing stored;
//! - submit on a valid draft: map it, enter `Submitting`, await the sink;
//! - sink succeeded: reset the draft, open the dialog, back to idle;
//! - sink failed: notify, keep the draft, back to idle.
//!
//! [`FormController::submit`] runs the whole cycle. Front ends that need to
//! render the `Submitting` phase can drive [`FormController::begin_submit`]
//! and [`FormController::finish_submit`] around their own `insert` call.

use crate::{
    ResultEngine,
    draft::{Field, RegistrationDraft},
    normalize::normalize,
    notify::{Notification, NotificationSink, SuccessDialog},
    record::PersistedRecord,
    sink::DataSink,
    validate::{Violation, validate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft broke a rule; nothing was sent.
    Rejected(Violation),
    /// A submission was already in flight.
    Busy,
    /// The sink stored the record and the draft was reset.
    Stored,
    /// The sink failed; the draft is kept for another try.
    Failed,
}

pub struct FormController<S, N, D> {
    draft: RegistrationDraft,
    phase: Phase,
    dialog_open: bool,
    sink: S,
    notifier: N,
    dialog: D,
}

impl<S, N, D> FormController<S, N, D>
where
    S: DataSink,
    N: NotificationSink,
    D: SuccessDialog,
{
    pub fn new(sink: S, notifier: N, dialog: D) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            phase: Phase::Idle,
            dialog_open: false,
            sink,
            notifier,
            dialog,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Raw access to the draft. Bypasses normalization.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    /// Stores the normalized form of `raw` in `field`.
    pub fn input(&mut self, field: Field, raw: &str) {
        let value = normalize(field, raw);
        tracing::debug!(?field, "field updated");
        *self.draft.field_mut(field) = value;
    }

    /// Validates the draft and, when it passes, enters `Submitting` and
    /// returns the record to hand to the sink.
    pub fn begin_submit(&mut self) -> Result<PersistedRecord, SubmitOutcome> {
        if self.phase == Phase::Submitting {
            tracing::warn!("submit ignored: a submission is already in flight");
            return Err(SubmitOutcome::Busy);
        }

        if let Err(violation) = validate(&self.draft) {
            tracing::warn!(%violation, "registration rejected");
            if let Some(notification) = violation.notification() {
                self.notifier.notify(notification);
            }
            self.notifier.notify(Notification::incomplete_form());
            return Err(SubmitOutcome::Rejected(violation));
        }

        let record = PersistedRecord::from(&self.draft);
        tracing::info!("registration accepted, submitting");
        self.phase = Phase::Submitting;
        Ok(record)
    }

    /// Applies the sink's answer to the submission started by
    /// [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: ResultEngine<()>) -> SubmitOutcome {
        self.phase = Phase::Idle;

        match result {
            Ok(()) => {
                self.draft = RegistrationDraft::default();
                self.dialog_open = true;
                self.dialog.set_open(true);
                SubmitOutcome::Stored
            }
            Err(err) => {
                tracing::error!("failed to store registration: {err}");
                self.notifier.notify(Notification::submit_failed());
                SubmitOutcome::Failed
            }
        }
    }

    /// Validates, stores and settles one submission.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let record = match self.begin_submit() {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };
        let result = self.sink.insert(&record).await;
        self.finish_submit(result)
    }

    /// Close callback of the success dialog.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.dialog.set_open(false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{EngineError, draft::ROLE_OTHER};

    #[derive(Default)]
    struct MemorySink {
        records: Mutex<Vec<PersistedRecord>>,
        fail: bool,
    }

    impl DataSink for MemorySink {
        async fn insert(&self, record: &PersistedRecord) -> ResultEngine<()> {
            if self.fail {
                return Err(EngineError::Rejected("unavailable".to_string()));
            }
            if let Ok(mut records) = self.records.lock() {
                records.push(record.clone());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Notes(Vec<Notification>);

    impl NotificationSink for Notes {
        fn notify(&mut self, notification: Notification) {
            self.0.push(notification);
        }
    }

    #[derive(Default)]
    struct Dialog {
        open: bool,
    }

    impl SuccessDialog for Dialog {
        fn set_open(&mut self, open: bool) {
            self.open = open;
        }
    }

    type Controller = FormController<MemorySink, Notes, Dialog>;

    fn controller(fail: bool) -> Controller {
        let sink = MemorySink {
            fail,
            ..Default::default()
        };
        FormController::new(sink, Notes::default(), Dialog::default())
    }

    fn fill(controller: &mut Controller) {
        for (field, raw) in [
            (Field::FullName, "Maria da Silva"),
            (Field::Age, "34"),
            (Field::ResidenceState, "SP"),
            (Field::Phone, "11987654321"),
            (Field::Email, "maria@exemplo.com"),
            (Field::Cpf, "12345678901"),
            (Field::ResidenceCity, "Campinas"),
            (Field::Employer, "Construtora Alfa"),
            (Field::TrainingCity, "São Paulo"),
            (Field::TrainingState, "sp"),
            (Field::EducationLevel, "superior-completo"),
            (Field::Role, ROLE_OTHER),
            (Field::RoleOther, "Coordenador"),
            (Field::EmotionalState, "alegre"),
        ] {
            controller.input(field, raw);
        }
    }

    fn stored(controller: &Controller) -> Vec<PersistedRecord> {
        controller.sink().records.lock().unwrap().clone()
    }

    #[test]
    fn input_is_normalized() {
        let mut controller = controller(false);
        controller.input(Field::Cpf, "12345678901");
        controller.input(Field::Phone, "11987654321");
        controller.input(Field::Age, "150");
        assert_eq!(controller.draft().cpf, "123.456.789-01");
        assert_eq!(controller.draft().phone, "(11)98765-4321");
        assert_eq!(controller.draft().age, "15");
    }

    #[tokio::test]
    async fn valid_submission_is_stored_and_resets_draft() {
        let mut controller = controller(false);
        fill(&mut controller);

        let outcome = controller.submit().await;

        let records = stored(&controller);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cpf, "12345678901");
        assert_eq!(records[0].telefone, "11987654321");
        assert_eq!(records[0].funcao, "Coordenador");
        assert_eq!(records[0].estado_treinamento, "SP");
        assert_eq!(outcome, SubmitOutcome::Stored);
        assert!(controller.draft().is_empty());
        assert!(controller.is_dialog_open());
        assert!(controller.dialog().open);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.notifier().0.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_age_is_rejected_without_storing() {
        let mut controller = controller(false);
        fill(&mut controller);
        controller.draft_mut().age = "150".to_string();
        let before = controller.draft().clone();

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected(Violation::AgeOutOfRange));
        assert!(stored(&controller).is_empty());
        assert_eq!(controller.draft(), &before);
        assert!(!controller.is_dialog_open());

        let notes = &controller.notifier().0;
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Idade Inválida");
        assert_eq!(notes[1], Notification::incomplete_form());
    }

    #[tokio::test]
    async fn missing_field_only_sends_generic_notification() {
        let mut controller = controller(false);
        fill(&mut controller);
        controller.input(Field::Employer, "");

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Violation::MissingField(Field::Employer))
        );
        assert_eq!(controller.notifier().0, vec![Notification::incomplete_form()]);
    }

    #[tokio::test]
    async fn sink_failure_keeps_draft() {
        let mut controller = controller(true);
        fill(&mut controller);
        let before = controller.draft().clone();

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(controller.draft(), &before);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_dialog_open());
        assert_eq!(controller.notifier().0, vec![Notification::submit_failed()]);
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut controller = controller(false);
        fill(&mut controller);

        let record = controller.begin_submit().unwrap();
        assert_eq!(record.funcao, "Coordenador");
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit(), Err(SubmitOutcome::Busy));

        let outcome = controller.finish_submit(Ok(()));
        assert_eq!(outcome, SubmitOutcome::Stored);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn closing_dialog_closes_collaborator() {
        let mut controller = controller(false);
        fill(&mut controller);
        controller.submit().await;
        controller.close_dialog();
        assert!(!controller.is_dialog_open());
        assert!(!controller.dialog().open);
    }
}
