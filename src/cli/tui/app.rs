use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    DefaultTerminal, Frame,
};
use tokio::task::JoinHandle;
use tokio::time;
use tui_input::backend::crossterm::EventHandler;

use crate::catalog::BookId;
use crate::Result;

use super::events::AppEvent;
use super::refresh::spawn_refresh_timer;
use super::state::{CatalogState, Focus, FormField, RefreshState};
use super::theme::Theme;

/// Main application struct
pub struct App {
    /// State for the catalog page
    state: CatalogState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Event sender for background tasks
    event_tx: Option<tokio::sync::mpsc::UnboundedSender<AppEvent>>,
    /// Handle for a still-pending refresh timer
    refresh_task: Option<JoinHandle<()>>,
    /// Generation counter tying refresh completions to invocations
    refresh_generation: u64,
    /// Spinner animation frame, advanced on ticks
    spinner_frame: usize,
    /// Track Ctrl+C presses for double-press exit
    ctrl_c_count: u8,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<std::time::Instant>,
}

impl App {
    /// Create a new app instance, seeded with the demonstration catalog
    pub fn new() -> Self {
        Self {
            state: CatalogState::new(),
            should_quit: false,
            theme: Theme::default(),
            event_tx: None,
            refresh_task: None,
            refresh_generation: 0,
            spinner_frame: 0,
            ctrl_c_count: 0,
            last_ctrl_c: None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Mouse(mouse) => {
                            let _ = input_tx.send(AppEvent::Mouse(mouse));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for the spinner animation
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Channel closed
                Err(_) => {
                    // Timeout - send tick for animations
                    self.handle_event(AppEvent::Tick)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the catalog page
    fn render(&mut self, frame: &mut Frame) {
        super::screens::catalog::render(frame, &self.state, &self.theme, self.spinner_frame);
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => {
                // Global keys first
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(event::KeyModifiers::CONTROL)
                {
                    // Handle Ctrl+C - exit on double press
                    let now = std::time::Instant::now();
                    if let Some(last) = self.last_ctrl_c {
                        if now.duration_since(last).as_millis() < 1000 {
                            self.should_quit = true;
                            return Ok(());
                        }
                    }
                    self.ctrl_c_count = 1;
                    self.last_ctrl_c = Some(now);
                    return Ok(());
                }

                if key.code == KeyCode::Tab {
                    self.state.focus = self.state.focus.next();
                    return Ok(());
                }

                match self.state.focus {
                    Focus::Form => self.handle_form_key(key),
                    Focus::Search => self.handle_search_key(key),
                    Focus::List => self.handle_list_key(key),
                }
            }
            AppEvent::RefreshComplete { generation } => {
                // A completion from an aborted/restarted timer is stale
                if self.state.refresh == (RefreshState::Loading { generation }) {
                    self.state.refresh = RefreshState::Idle;
                    self.refresh_task = None;
                }
                Ok(())
            }
            AppEvent::Tick => {
                if self.state.refresh.is_loading() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Ok(())
            }
            AppEvent::Mouse(_) | AppEvent::Resize(..) => Ok(()),
        }
    }

    /// Keys while the add form owns the keyboard
    fn handle_form_key(&mut self, key: event::KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state.focus = Focus::List;
            }
            KeyCode::Up => {
                self.state.form.field = self.state.form.field.prev();
            }
            KeyCode::Down => {
                self.state.form.field = self.state.form.field.next();
            }
            KeyCode::Enter => {
                self.state.submit_form();
            }
            _ => {
                self.state
                    .form
                    .current_input_mut()
                    .handle_event(&Event::Key(key));
            }
        }
        Ok(())
    }

    /// Keys while the search bar owns the keyboard
    fn handle_search_key(&mut self, key: event::KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.state.focus = Focus::List;
            }
            _ => {
                self.state.search_input.handle_event(&Event::Key(key));
                self.state.clamp_selection();
            }
        }
        Ok(())
    }

    /// Keys on the book list
    fn handle_list_key(&mut self, key: event::KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                if self.state.selected_index > 0 {
                    self.state.selected_index -= 1;
                }
            }
            KeyCode::Down => {
                let visible = self
                    .state
                    .store
                    .filter(self.state.search_input.value())
                    .len();
                if self.state.selected_index < visible.saturating_sub(1) {
                    self.state.selected_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_book_id() {
                    self.state.store.toggle_issued(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_book_id() {
                    self.state.store.delete(id);
                    self.state.clamp_selection();
                }
            }
            KeyCode::Char('r') => self.start_refresh(),
            KeyCode::Char('/') => {
                self.state.focus = Focus::Search;
            }
            KeyCode::Char('a') => {
                self.state.focus = Focus::Form;
                self.state.form.field = FormField::Title;
            }
            _ => {}
        }
        Ok(())
    }

    /// Start (or restart) the simulated refresh. Mutates nothing; a
    /// timer task posts the completion after the fixed delay.
    fn start_refresh(&mut self) {
        if let Some(task) = self.refresh_task.take() {
            task.abort();
        }

        self.refresh_generation += 1;
        self.state.refresh = RefreshState::Loading {
            generation: self.refresh_generation,
        };

        if let Some(tx) = &self.event_tx {
            self.refresh_task = Some(spawn_refresh_timer(self.refresh_generation, tx.clone()));
        }
    }

    /// Id of the book under the list highlight, within the filtered view
    fn selected_book_id(&self) -> Option<BookId> {
        self.state
            .store
            .filter(self.state.search_input.value())
            .get(self.state.selected_index)
            .map(|book| book.id)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
