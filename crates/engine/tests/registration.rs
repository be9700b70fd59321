use sea_orm::{Database, DatabaseConnection, EntityTrait};

use engine::{
    DataSink, Field, FormController, Notification, NotificationSink, ROLE_OTHER, SeaOrmSink,
    SubmitOutcome, SuccessDialog, Violation, record,
};
use migration::MigratorTrait;

#[derive(Default)]
struct Notes(Vec<Notification>);

impl NotificationSink for Notes {
    fn notify(&mut self, notification: Notification) {
        self.0.push(notification);
    }
}

#[derive(Default)]
struct Popup {
    opened: usize,
    open: bool,
}

impl SuccessDialog for Popup {
    fn set_open(&mut self, open: bool) {
        if open {
            self.opened += 1;
        }
        self.open = open;
    }
}

type Form = FormController<SeaOrmSink, Notes, Popup>;

async fn migrated_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

fn form(db: DatabaseConnection) -> Form {
    FormController::new(SeaOrmSink::new(db), Notes::default(), Popup::default())
}

fn type_into(form: &mut Form, field: Field, text: &str) {
    // One input event per keystroke, each carrying the whole value.
    let mut raw = form.draft().get(field).to_string();
    for ch in text.chars() {
        raw.push(ch);
        form.input(field, &raw);
        raw = form.draft().get(field).to_string();
    }
}

fn fill(form: &mut Form) {
    type_into(form, Field::FullName, "Ana Paula Ferreira");
    type_into(form, Field::Age, "41");
    form.input(Field::ResidenceState, "MG");
    type_into(form, Field::Phone, "31999887766");
    type_into(form, Field::Email, "ana.ferreira@empresa.com.br");
    type_into(form, Field::Cpf, "01234567890");
    type_into(form, Field::ResidenceCity, "Belo Horizonte");
    type_into(form, Field::Employer, "Mineração Gama");
    type_into(form, Field::TrainingCity, "Contagem");
    form.input(Field::TrainingState, "MG");
    form.input(Field::EducationLevel, "ensino-medio-completo");
    form.input(Field::Role, "supervisor");
    form.input(Field::EmotionalState, "normal");
}

#[tokio::test]
async fn typing_builds_masked_values() {
    let mut form = form(migrated_db().await);
    fill(&mut form);

    assert_eq!(form.draft().cpf, "012.345.678-90");
    assert_eq!(form.draft().phone, "(31)99988-7766");
    assert_eq!(form.draft().age, "41");
}

#[tokio::test]
async fn stored_registration_has_numeric_columns() {
    let db = migrated_db().await;
    let mut form = form(db.clone());
    fill(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Stored);
    assert!(form.draft().is_empty());
    assert!(form.is_dialog_open());
    assert_eq!(form.dialog().opened, 1);

    let rows = record::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.nome_completo.as_deref(), Some("Ana Paula Ferreira"));
    assert_eq!(row.cpf, Some(1234567890));
    assert_eq!(row.telefone, Some(31999887766));
    assert_eq!(row.idade, Some(41));
    assert_eq!(row.funcao.as_deref(), Some("supervisor"));
    assert_eq!(row.estado_treinamento.as_deref(), Some("MG"));
    assert!(row.criado_em.is_some());
    assert_eq!(row.treinamento_id, None);
}

#[tokio::test]
async fn other_role_is_stored_as_description() {
    let db = migrated_db().await;
    let mut form = form(db.clone());
    fill(&mut form);
    form.input(Field::Role, ROLE_OTHER);

    let outcome = form.submit().await;
    assert_eq!(outcome, SubmitOutcome::Rejected(Violation::RoleOtherMissing));
    assert_eq!(form.notifier().0.len(), 2);

    type_into(&mut form, Field::RoleOther, "Coordenador");
    assert_eq!(form.submit().await, SubmitOutcome::Stored);

    let sink = SeaOrmSink::new(db);
    let rows = sink.list(10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].funcao.as_deref(), Some("Coordenador"));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let db = migrated_db().await;
    let mut form = form(db.clone());

    fill(&mut form);
    assert_eq!(form.submit().await, SubmitOutcome::Stored);
    form.close_dialog();

    fill(&mut form);
    form.input(Field::FullName, "Bruno Lima");
    assert_eq!(form.submit().await, SubmitOutcome::Stored);

    let rows = form.sink().list(1).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nome_completo.as_deref(), Some("Bruno Lima"));
}

#[tokio::test]
async fn missing_table_fails_and_keeps_draft() {
    // Not migrated: the insert fails on the database side.
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let mut form = form(db);
    fill(&mut form);
    let before = form.draft().clone();

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert_eq!(form.draft(), &before);
    assert!(!form.is_dialog_open());
    assert_eq!(form.notifier().0, vec![Notification::submit_failed()]);
}

#[tokio::test]
async fn sink_can_be_driven_directly() {
    let db = migrated_db().await;
    let mut form = form(db.clone());
    fill(&mut form);

    let record = form.begin_submit().unwrap();
    assert!(form.is_submitting());
    let result = form.sink().insert(&record).await;
    assert_eq!(form.finish_submit(result), SubmitOutcome::Stored);
    assert!(!form.is_submitting());
}
