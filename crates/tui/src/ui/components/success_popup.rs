use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{app::SuccessPopup, ui::components::centered_rect, ui::theme::Theme};

const MESSAGE: &str = "Seu cadastro foi feito com sucesso, parabéns! Aqui se inicia uma nova \
                       jornada, Academia de Líderes - Módulo l";

pub fn render(frame: &mut Frame<'_>, area: Rect, popup: &SuccessPopup, theme: &Theme) {
    if !popup.is_open() {
        return;
    }

    let rect = centered_rect(56, 10, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Academia de Líderes Módulo l ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.positive));

    let lines = vec![
        Line::styled(
            "Cadastro Alunos",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(MESSAGE, Style::default().fg(theme.text)),
        Line::default(),
        Line::styled("Enter/Esc para fechar", Style::default().fg(theme.text_muted)),
    ];

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(content, rect);
}
