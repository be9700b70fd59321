use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use engine::{
    Field, FormController, Notification, NotificationSink, PersistedRecord, RegistrationDraft,
    SeaOrmSink, SubmitOutcome, SuccessDialog, Violation, normalize, validate,
};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "cadastro_admin")]
#[command(about = "Admin utilities for Cadastro Alunos (migrations, imports, listing)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./cadastro.db?mode=rwc"
    )]
    database_url: String,

    /// Log level written to stderr.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending migrations.
    Migrate,
    /// Submit a registration read from a JSON file.
    Submit(SubmitArgs),
    /// Print stored registrations, newest first.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    /// JSON draft with the form's camelCase keys; `-` reads stdin.
    #[arg(long)]
    file: PathBuf,
    /// Validate and print the mapped record without storing it.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value_t = 20)]
    limit: u64,
}

struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, "notification");
        eprintln!("{}: {}", notification.title, notification.message);
    }
}

struct ConsoleDialog;

impl SuccessDialog for ConsoleDialog {
    fn set_open(&mut self, open: bool) {
        if open {
            println!("Academia de Líderes Módulo l - Cadastro Alunos");
            println!(
                "Seu cadastro foi feito com sucesso, parabéns! Aqui se inicia uma nova \
                 jornada, Academia de Líderes - Módulo l"
            );
        }
    }
}

fn read_draft(path: &Path) -> Result<RegistrationDraft, Box<dyn Error + Send + Sync>> {
    let raw = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Normalizes every field as if typed into the form, then validates.
fn dry_run(raw: &RegistrationDraft) -> Result<PersistedRecord, Violation> {
    let mut draft = RegistrationDraft::default();
    for field in Field::ALL {
        *draft.field_mut(field) = normalize(field, raw.get(field));
    }
    validate(&draft)?;
    Ok(PersistedRecord::from(&draft))
}

fn report_violation(violation: &Violation) {
    if let Some(notification) = violation.notification() {
        ConsoleNotifier.notify(notification);
    }
    ConsoleNotifier.notify(Notification::incomplete_form());
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn submit(
    database_url: &str,
    raw: &RegistrationDraft,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let sink = SeaOrmSink::new(connect_db(database_url).await?);
    let mut form = FormController::new(sink, ConsoleNotifier, ConsoleDialog);
    for field in Field::ALL {
        form.input(field, raw.get(field));
    }

    match form.submit().await {
        SubmitOutcome::Stored => Ok(()),
        SubmitOutcome::Rejected(violation) => {
            Err(format!("registration rejected: {violation}").into())
        }
        SubmitOutcome::Busy => Err("a submission is already in flight".into()),
        SubmitOutcome::Failed => Err("failed to store registration".into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let level = &cli.log_level;
    tracing_subscriber::fmt()
        .with_env_filter(format!("cadastro_admin={level},engine={level}"))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Migrate => {
            connect_db(&cli.database_url).await?;
            println!("migrations applied");
        }
        Command::Submit(args) => {
            let raw = read_draft(&args.file)?;
            if args.dry_run {
                match dry_run(&raw) {
                    Ok(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                    Err(violation) => {
                        report_violation(&violation);
                        return Err(format!("registration rejected: {violation}").into());
                    }
                }
            } else {
                submit(&cli.database_url, &raw).await?;
            }
        }
        Command::List(args) => {
            let sink = SeaOrmSink::new(connect_db(&cli.database_url).await?);
            for row in sink.list(args.limit).await? {
                println!("{}", serde_json::to_string(&row)?);
            }
        }
    }

    Ok(())
}
