use ratatui::style::Color;

/// Color theme shared by the intake form and the pager.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    /// Follow-up prompts on question cards.
    pub follow_up: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Cyan,
            text: Color::White,
            muted: Color::Gray,
            highlight: Color::Yellow,
            follow_up: Color::LightRed,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
            selected_bg: Color::DarkGray,
        }
    }
}
