use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(10, 14, 22),
            text: Color::Rgb(225, 225, 225),
            text_muted: Color::Rgb(140, 146, 156),
            accent: Color::Rgb(230, 170, 60),
            positive: Color::Rgb(90, 180, 110),
            error: Color::Rgb(210, 80, 80),
            border: Color::Rgb(70, 78, 92),
        }
    }
}
