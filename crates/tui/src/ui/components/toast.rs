use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::{ToastLevel, Toasts},
    ui::theme::Theme,
};

const MAX_WIDTH: u16 = 64;
const TOAST_HEIGHT: u16 = 4;

/// Stacks the visible toasts in the bottom-right corner, newest at the
/// bottom, above the hint bar.
pub fn render(frame: &mut Frame<'_>, area: Rect, toasts: &Toasts, theme: &Theme) {
    if toasts.is_empty() {
        return;
    }

    let mut bottom = area.y + area.height.saturating_sub(1);
    for toast in toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let text_width = toast.title.chars().count().max(toast.message.chars().count());
        let width = (text_width as u16)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width);
        let y = bottom - TOAST_HEIGHT;
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let style = match toast.level {
            ToastLevel::Info => Style::default().fg(theme.text),
            ToastLevel::Success => Style::default().fg(theme.positive),
            ToastLevel::Error => Style::default().fg(theme.error),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);
        let content = Paragraph::new(vec![
            Line::styled(toast.title.as_str(), style.add_modifier(Modifier::BOLD)),
            Line::styled(toast.message.as_str(), Style::default().fg(theme.text)),
        ])
        .wrap(Wrap { trim: true });

        frame.render_widget(Clear, rect);
        frame.render_widget(content.block(block), rect);
        bottom = y;
    }
}
