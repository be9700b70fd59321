pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::App;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = Theme::default();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_header(frame, layout[0], &theme);
    screens::form::render(frame, layout[1], app, &theme);
    render_bottom_bar(frame, layout[2], app, &theme);

    components::toast::render(frame, area, app.form.notifier(), &theme);
    components::success_popup::render(frame, area, app.form.dialog(), &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "Academia de Líderes Módulo l",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Cadastro Alunos", Style::default().fg(theme.text)),
        Line::styled(
            "Preencha seus dados abaixo e inicie sua jornada na Academia de Líderes",
            Style::default().fg(theme.text_muted),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let hints = if app.form.dialog().is_open() {
        components::hints::popup()
    } else {
        components::hints::form(app.focus.options().is_some())
    };
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
