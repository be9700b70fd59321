use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::{Choice, Field};

use crate::{
    app::{App, visible_fields},
    ui::theme::Theme,
};

const LABEL_WIDTH: usize = 45;
const PLACEHOLDER: &str = "Selecione...";

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .title(" Dados do Aluno ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = app.form.draft();
    let fields: Vec<Field> = visible_fields(draft).collect();

    // One row per field, a spacer, then the submit control.
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (row, field) in rows.iter().zip(&fields) {
        let focused = *field == app.focus;
        let line = field_line(*field, draft.get(*field), focused, theme);
        frame.render_widget(Paragraph::new(line), *row);
    }

    let submit = if app.form.is_submitting() {
        Span::styled("Enviando...", Style::default().fg(theme.text_muted))
    } else {
        Span::styled(
            "[ Enviar Formulário ]",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(submit)).alignment(Alignment::Center),
        rows[fields.len() + 1],
    );
}

fn field_line(field: Field, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if field.is_required() { " *" } else { "" };
    let label = format!("{}{marker}", field.label());

    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let value = match field.options() {
        Some(options) => render_choice(options, value, focused),
        None if focused => format!("{value}│"),
        None => value.to_string(),
    };
    let value_style = if value.ends_with(PLACEHOLDER) && !focused {
        Style::default().fg(theme.text_muted)
    } else {
        value_style
    };

    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        Span::styled(value, value_style),
    ])
}

/// Display label of the selected option, with arrows while focused.
fn render_choice(options: &[Choice], value: &str, focused: bool) -> String {
    let shown = options
        .iter()
        .find(|(stored, _)| *stored == value)
        .map(|(_, label)| *label)
        .unwrap_or(PLACEHOLDER);

    if focused {
        format!("‹ {shown} ›")
    } else {
        shown.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_shows_label_of_stored_value() {
        let options = Field::EducationLevel.options().unwrap();
        assert_eq!(
            render_choice(options, "ensino-tecnico", false),
            "Ensino Técnico"
        );
        assert_eq!(render_choice(options, "", false), PLACEHOLDER);
        assert_eq!(render_choice(options, "", true), "‹ Selecione... ›");
    }

    #[test]
    fn focused_text_field_shows_cursor() {
        let theme = Theme::default();
        let line = field_line(Field::Cpf, "123.456", true, &theme);
        assert_eq!(line.spans[1].content, "123.456│");

        let line = field_line(Field::Cpf, "123.456", false, &theme);
        assert_eq!(line.spans[1].content, "123.456");
    }

    #[test]
    fn optional_field_has_no_marker() {
        let theme = Theme::default();
        let required = field_line(Field::FullName, "", false, &theme);
        assert!(required.spans[0].content.trim_end().ends_with('*'));
        let optional = field_line(Field::RoleOther, "", false, &theme);
        assert!(!optional.spans[0].content.trim_end().ends_with('*'));
    }
}
