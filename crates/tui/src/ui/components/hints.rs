use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(theme.text_muted),
        ));
    }

    spans
}

/// Hints while editing the form; `on_choice` adds option cycling.
pub fn form(on_choice: bool) -> Vec<KeyHint> {
    let mut hints = vec![KeyHint::new("Tab/↑↓", "campo")];
    if on_choice {
        hints.push(KeyHint::new("←→", "opção"));
    }
    hints.push(KeyHint::new("Enter", "enviar"));
    hints.push(KeyHint::new("Esc", "sair"));
    hints
}

pub fn popup() -> Vec<KeyHint> {
    vec![KeyHint::new("Enter/Esc", "fechar")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_hint_only_on_choice_fields() {
        assert_eq!(form(false).len(), 3);
        let hints = form(true);
        assert_eq!(hints.len(), 4);
        assert_eq!(hints[1].key, "←→");
    }

    #[test]
    fn spans_alternate_key_and_action() {
        let theme = Theme::default();
        let spans = hints_to_spans(&popup(), &theme);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Enter/Esc");
        assert_eq!(spans[1].content, " fechar");
    }
}
