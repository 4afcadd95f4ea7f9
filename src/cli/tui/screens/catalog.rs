//! The single catalog page: app bar, add form, search bar and book list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_input::Input;

use crate::cli::tui::state::{CatalogState, Focus, FormField};
use crate::cli::tui::theme::Theme;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the catalog page
pub fn render(frame: &mut Frame, state: &CatalogState, theme: &Theme, spinner_frame: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // App bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_app_bar(frame, chunks[0], state, theme);
    render_main_area(frame, chunks[1], state, theme, spinner_frame);
    render_help_bar(frame, chunks[2]);
}

/// App bar: brand on the left, live book count badge on the right
fn render_app_bar(frame: &mut Frame, area: Rect, state: &CatalogState, theme: &Theme) {
    let bar = Block::default().borders(Borders::ALL);
    let inner = bar.inner(area);
    frame.render_widget(bar, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" LibManager", theme.highlight),
    ]));
    frame.render_widget(brand, chunks[0]);

    // Total collection size, not the filtered count
    let count = state.store.len();
    let label = if count == 1 { "Book" } else { "Books" };
    let badge = Paragraph::new(Line::from(Span::styled(
        format!("{count} {label} "),
        theme.badge,
    )))
    .alignment(Alignment::Right);
    frame.render_widget(badge, chunks[1]);
}

/// Main area: add form on the left, search + list on the right
fn render_main_area(
    frame: &mut Frame,
    area: Rect,
    state: &CatalogState,
    theme: &Theme,
    spinner_frame: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    render_add_form(frame, chunks[0], state, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[1]);

    render_search_bar(frame, right[0], state, theme, spinner_frame);
    render_book_list(frame, right[1], state, theme);
}

/// The add-book form card
fn render_add_form(frame: &mut Frame, area: Rect, state: &CatalogState, theme: &Theme) {
    let focused = state.focus == Focus::Form;
    let card = Block::default()
        .title(" Add New Book ")
        .borders(Borders::ALL)
        .border_style(if focused { theme.focused } else { Style::default() });
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = [
        (FormField::Title, &state.form.title),
        (FormField::Author, &state.form.author),
        (FormField::Isbn, &state.form.isbn),
    ];

    for (row, (field, input)) in rows.iter().zip(fields) {
        let active = focused && state.form.field == field;
        render_input_field(frame, *row, field.label(), input, active, theme);
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Add Book"),
    ]))
    .style(theme.muted);
    frame.render_widget(hint, rows[3]);
}

/// One labeled text field; sets the terminal cursor when active
fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    active: bool,
    theme: &Theme,
) {
    let width = area.width.saturating_sub(2).max(1);
    let scroll = input.visual_scroll(width as usize);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(if active { theme.focused } else { theme.muted });

    let text = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(text, area);

    if active {
        let cursor_x = area.x + 1 + (input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((cursor_x.min(area.x + width), area.y + 1));
    }
}

/// Search bar with the refresh indicator in its title
fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    state: &CatalogState,
    theme: &Theme,
    spinner_frame: usize,
) {
    let focused = state.focus == Focus::Search;
    let title = if state.refresh.is_loading() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        format!(" Search library  {spinner} Refreshing ")
    } else {
        " Search library ".to_string()
    };

    let width = area.width.saturating_sub(2).max(1);
    let scroll = state.search_input.visual_scroll(width as usize);

    let search = Paragraph::new(state.search_input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(if focused { theme.focused } else { Style::default() }),
        );
    frame.render_widget(search, area);

    if focused {
        let cursor_x =
            area.x + 1 + (state.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((cursor_x.min(area.x + width), area.y + 1));
    }
}

/// The filtered book list, or the empty-state message
fn render_book_list(frame: &mut Frame, area: Rect, state: &CatalogState, theme: &Theme) {
    let focused = state.focus == Focus::List;
    let block = Block::default()
        .title(" Books ")
        .borders(Borders::ALL)
        .border_style(if focused { theme.focused } else { Style::default() });

    let filtered = state.store.filter(state.search_input.value());

    if filtered.is_empty() {
        let empty = Paragraph::new("No books found.")
            .style(theme.muted)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut items: Vec<ListItem> = vec![];
    for (idx, book) in filtered.iter().enumerate() {
        let is_selected = focused && idx == state.selected_index;

        let isbn_chip = if book.isbn.is_empty() {
            "No ISBN".to_string()
        } else {
            book.isbn.clone()
        };

        let title_line = Line::from(vec![
            Span::styled(
                book.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", Theme::status_label(book.is_issued)),
                theme.status_style(book.is_issued),
            ),
        ]);
        let detail_line = Line::from(vec![
            Span::styled(format!("by {}", book.author), theme.muted),
            Span::raw("  "),
            Span::styled(isbn_chip, Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", Theme::toggle_hint(book.is_issued)),
                theme.muted,
            ),
        ]);

        let style = if is_selected {
            theme.selected
        } else {
            Style::default()
        };
        items.push(ListItem::new(vec![title_line, detail_line, Line::from("")]).style(style));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Render the help bar
fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Span::raw(" "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" Panel  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Move  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Issue/Return  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("d", Style::default().fg(Color::Cyan)),
        Span::raw(" Delete  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" Refresh  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("/", Style::default().fg(Color::Cyan)),
        Span::raw(" Search  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ];

    let help = Paragraph::new(Line::from(help_text)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(help, area);
}
