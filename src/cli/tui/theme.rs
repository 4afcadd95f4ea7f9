use ratatui::style::{Color, Modifier, Style};

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub available: Style,
    pub issued: Style,
    pub muted: Style,
    pub highlight: Style,
    pub badge: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Blue),
            available: Style::default()
                .fg(Color::Green),
            issued: Style::default()
                .fg(Color::Yellow),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            badge: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Get the status chip label
    pub fn status_label(is_issued: bool) -> &'static str {
        if is_issued {
            "Issued Out"
        } else {
            "Available"
        }
    }

    /// Get the style for a status chip
    pub fn status_style(&self, is_issued: bool) -> Style {
        if is_issued {
            self.issued
        } else {
            self.available
        }
    }

    /// Get the toggle action hint for a book's current status
    pub fn toggle_hint(is_issued: bool) -> &'static str {
        if is_issued {
            "Return"
        } else {
            "Issue"
        }
    }
}
