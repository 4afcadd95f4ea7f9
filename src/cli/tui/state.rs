use tui_input::Input;

use crate::catalog::CatalogStore;

/// State for the single catalog page
#[derive(Debug)]
pub struct CatalogState {
    /// The authoritative collection
    pub store: CatalogStore,

    // UI state
    pub focus: Focus,
    pub form: AddForm,
    pub search_input: Input,
    /// Selection index into the current filtered view
    pub selected_index: usize,
    pub refresh: RefreshState,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::with_seed(),
            focus: Focus::default(),
            form: AddForm::default(),
            search_input: Input::default(),
            selected_index: 0,
            refresh: RefreshState::Idle,
        }
    }

    /// Submit the add form against the store. An empty title or author
    /// is a silent no-op that leaves the form contents in place; a
    /// successful add resets the form and selects the new (first) row.
    pub fn submit_form(&mut self) -> bool {
        let added = self.store.add(
            self.form.title.value(),
            self.form.author.value(),
            self.form.isbn.value(),
        );

        if added.is_some() {
            self.form.reset();
            self.selected_index = 0;
        }
        added.is_some()
    }

    /// Clamp the list selection to the current filtered view. Called
    /// after every mutation and search edit so the highlight never
    /// points past the end.
    pub fn clamp_selection(&mut self) {
        let visible = self.store.filter(self.search_input.value()).len();
        if visible == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which panel owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Search,
    List,
}

impl Focus {
    /// Tab order: form, search bar, book list.
    pub fn next(self) -> Self {
        match self {
            Focus::Form => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::Form,
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::List
    }
}

/// The add-book form: three text fields, one focused at a time
#[derive(Debug, Default)]
pub struct AddForm {
    pub title: Input,
    pub author: Input,
    pub isbn: Input,
    pub field: FormField,
}

impl AddForm {
    pub fn current_input_mut(&mut self) -> &mut Input {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Isbn => &mut self.isbn,
        }
    }

    pub fn current_input(&self) -> &Input {
        match self.field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Isbn => &self.isbn,
        }
    }

    /// Clear all three fields and return focus to the title. Only done
    /// after a successful add; a rejected submit leaves the form as-is.
    pub fn reset(&mut self) {
        self.title.reset();
        self.author.reset();
        self.isbn.reset();
        self.field = FormField::Title;
    }

    pub fn is_empty(&self) -> bool {
        self.title.value().is_empty()
            && self.author.value().is_empty()
            && self.isbn.value().is_empty()
    }
}

/// Which field is focused in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Isbn,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Isbn,
            FormField::Isbn => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Isbn,
            FormField::Author => FormField::Title,
            FormField::Isbn => FormField::Author,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Book Title",
            FormField::Author => "Author",
            FormField::Isbn => "ISBN (Optional)",
        }
    }
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Title
    }
}

/// Refresh affordance: idle, or waiting out the simulated latency.
///
/// The generation number ties a loading state to the timer task that
/// will complete it; a completion event carrying a stale generation is
/// ignored, which is what makes re-invocation restart the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Loading { generation: u64 },
}

impl RefreshState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RefreshState::Loading { .. })
    }
}
