use ratatui::crossterm::event::{KeyEvent, MouseEvent};

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Async task events - refresh timer
    RefreshComplete { generation: u64 },

    // UI events
    Tick, // for the refresh spinner animation
}
