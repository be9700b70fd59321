use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use engine::{
    DataSink, Field, FormController, Notification, NotificationSink, RegistrationDraft,
    SeaOrmSink, Severity, SubmitOutcome, SuccessDialog,
};

use crate::{
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl From<Severity> for ToastLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Info,
            Severity::Success => Self::Success,
            Severity::Destructive => Self::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

/// Notification sink of the terminal front end: a short stack of toasts,
/// oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<ToastState>,
}

impl Toasts {
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.items.push_back(ToastState {
            title: notification.title,
            message: notification.message,
            level: notification.severity.into(),
            shown_at: now,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_TTL);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ToastState> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NotificationSink for Toasts {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}

#[derive(Debug, Default)]
pub struct SuccessPopup {
    open: bool,
}

impl SuccessPopup {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl SuccessDialog for SuccessPopup {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

pub type Form = FormController<SeaOrmSink, Toasts, SuccessPopup>;

pub struct App {
    pub form: Form,
    pub focus: Field,
    should_quit: bool,
}

impl App {
    pub fn new(sink: SeaOrmSink) -> Self {
        Self {
            form: FormController::new(sink, Toasts::default(), SuccessPopup::default()),
            focus: Field::ALL[0],
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.form.notifier_mut().expire(Instant::now());
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, terminal).await?
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent, terminal: &mut ui::Terminal) -> Result<()> {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return Ok(());
        }
        if self.form.is_submitting() {
            return Ok(());
        }
        if self.form.is_dialog_open() {
            if matches!(action, AppAction::Cancel | AppAction::Submit) {
                self.form.close_dialog();
            }
            return Ok(());
        }

        match action {
            AppAction::Cancel => self.should_quit = true,
            AppAction::NextField => self.focus = next_focus(self.focus, self.form.draft()),
            AppAction::PrevField => self.focus = prev_focus(self.focus, self.form.draft()),
            AppAction::NextOption | AppAction::PrevOption => {
                let forward = action == AppAction::NextOption;
                let current = self.form.draft().get(self.focus);
                if let Some(value) = cycle_choice(self.focus, current, forward) {
                    self.form.input(self.focus, value);
                }
            }
            AppAction::Backspace => {
                if self.focus.options().is_some() {
                    self.form.input(self.focus, "");
                } else {
                    let mut raw = self.form.draft().get(self.focus).to_string();
                    raw.pop();
                    self.form.input(self.focus, &raw);
                }
            }
            AppAction::Input(ch) => {
                if self.focus.options().is_none() {
                    let mut raw = self.form.draft().get(self.focus).to_string();
                    raw.push(ch);
                    self.form.input(self.focus, &raw);
                }
            }
            AppAction::Submit => self.submit(terminal).await?,
            AppAction::Quit | AppAction::None => {}
        }

        Ok(())
    }

    async fn submit(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let Ok(record) = self.form.begin_submit() else {
            return Ok(());
        };

        // One frame in the submitting phase, then block on the insert.
        let drawn = terminal.draw(|frame| ui::render(frame, self));
        let result = self.form.sink().insert(&record).await;
        if self.form.finish_submit(result) == SubmitOutcome::Stored {
            self.focus = Field::ALL[0];
        }

        drawn
            .map(|_| ())
            .map_err(|err| AppError::Terminal(err.to_string()))
    }
}

/// Fields the user can currently reach. `RoleOther` only appears while the
/// role is "Outros".
pub fn visible_fields(draft: &RegistrationDraft) -> impl Iterator<Item = Field> + '_ {
    Field::ALL
        .into_iter()
        .filter(|field| *field != Field::RoleOther || draft.wants_role_other())
}

pub fn next_focus(current: Field, draft: &RegistrationDraft) -> Field {
    let fields: Vec<Field> = visible_fields(draft).collect();
    match fields.iter().position(|field| *field == current) {
        Some(index) => fields[(index + 1) % fields.len()],
        None => fields[0],
    }
}

pub fn prev_focus(current: Field, draft: &RegistrationDraft) -> Field {
    let fields: Vec<Field> = visible_fields(draft).collect();
    match fields.iter().position(|field| *field == current) {
        Some(index) => fields[(index + fields.len() - 1) % fields.len()],
        None => fields[0],
    }
}

/// Neighbouring option of a choice field, wrapping around. An empty
/// selection moves to the first (or last) option.
pub fn cycle_choice(field: Field, current: &str, forward: bool) -> Option<&'static str> {
    let options = field.options()?;
    let last = options.len().checked_sub(1)?;
    let index = match options.iter().position(|(value, _)| *value == current) {
        None if forward => 0,
        None => last,
        Some(index) if forward => (index + 1) % options.len(),
        Some(0) => last,
        Some(index) => index - 1,
    };
    Some(options[index].0)
}
