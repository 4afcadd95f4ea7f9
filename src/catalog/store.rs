use chrono::Utc;

use super::book::{Book, BookId};

/// In-memory catalog store.
///
/// Owns the authoritative ordered collection of books (most recently
/// added first) and hands out ids from a private counter. Every
/// operation is synchronous and infallible: validation failures and
/// absent ids are silent no-ops, matching the reference behavior.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    books: Vec<Book>,
    next_id: u64,
}

impl CatalogStore {
    /// Empty store. The id counter starts at 1.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with the fixed demonstration records, in
    /// display order. Ids 1 through 4 are taken by the seed.
    pub fn with_seed() -> Self {
        let now = Utc::now();
        let seed = [
            ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", false),
            ("Clean Code", "Robert C. Martin", "9780132350884", true),
            ("1984", "George Orwell", "9780451524935", false),
            ("Design Patterns", "Erich Gamma", "9780201633610", false),
        ];

        let books = seed
            .iter()
            .enumerate()
            .map(|(i, (title, author, isbn, is_issued))| Book {
                id: BookId(i as u64 + 1),
                title: title.to_string(),
                author: author.to_string(),
                isbn: isbn.to_string(),
                is_issued: *is_issued,
                created_at: now,
            })
            .collect();

        Self {
            books,
            next_id: seed.len() as u64 + 1,
        }
    }

    /// Add a new available book to the front of the collection.
    ///
    /// Title and author are required; if either is empty the store is
    /// left untouched and `None` is returned. Presence is the only
    /// check: fields are stored verbatim, and the isbn may be empty.
    pub fn add(&mut self, title: &str, author: &str, isbn: &str) -> Option<BookId> {
        if title.is_empty() || author.is_empty() {
            return None;
        }

        let id = BookId(self.next_id);
        self.next_id += 1;

        self.books.insert(
            0,
            Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
                isbn: isbn.to_string(),
                is_issued: false,
                created_at: Utc::now(),
            },
        );

        Some(id)
    }

    /// Remove the book with the given id. No-op when absent; relative
    /// order of the remaining books is preserved.
    pub fn delete(&mut self, id: BookId) {
        self.books.retain(|book| book.id != id);
    }

    /// Flip the issued flag for the given id. No-op when absent; the
    /// book keeps its position and every other field.
    pub fn toggle_issued(&mut self, id: BookId) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == id) {
            book.is_issued = !book.is_issued;
        }
    }

    /// Order-preserving view of the books whose title or author contains
    /// the query, case-insensitively. The empty query matches everything.
    /// Recomputed on every call; never cached, never mutates.
    pub fn filter(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn add_assigns_distinct_ids() {
        let mut store = CatalogStore::with_seed();
        for i in 0..20 {
            store.add(&format!("Book {i}"), "Author", "");
        }

        let ids: HashSet<BookId> = store.books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn add_prepends() {
        let mut store = CatalogStore::with_seed();
        let id = store.add("Dune", "Frank Herbert", "").unwrap();

        assert_eq!(store.books()[0].id, id);
        assert_eq!(store.books()[0].title, "Dune");
        assert!(!store.books()[0].is_issued);
    }

    #[test]
    fn add_rejects_empty_required_fields() {
        let mut store = CatalogStore::with_seed();

        assert_eq!(store.add("", "Author", "x"), None);
        assert_eq!(store.add("Title", "", "x"), None);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn add_stores_fields_verbatim() {
        // Presence is the only validation; whitespace is kept as typed.
        let mut store = CatalogStore::new();
        let id = store.add(" Dune ", " Frank Herbert ", " 9780441013593 ").unwrap();

        let book = store.get(id).unwrap();
        assert_eq!(book.title, " Dune ");
        assert_eq!(book.author, " Frank Herbert ");
        assert_eq!(book.isbn, " 9780441013593 ");
    }

    #[test]
    fn add_allows_empty_isbn() {
        let mut store = CatalogStore::new();
        let id = store.add("Dune", "Frank Herbert", "").unwrap();
        assert_eq!(store.get(id).unwrap().isbn, "");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = CatalogStore::new();
        let first = store.add("A", "a", "").unwrap();
        store.delete(first);
        let second = store.add("B", "b", "").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = CatalogStore::with_seed();
        let id = store.books()[1].id;

        store.delete(id);
        let after_first: Vec<Book> = store.books().to_vec();
        store.delete(id);

        assert_eq!(store.books(), after_first.as_slice());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut store = CatalogStore::with_seed();
        store.delete(store.books()[1].id);

        let titles: Vec<&str> = store.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["The Great Gatsby", "1984", "Design Patterns"]);
    }

    #[test]
    fn delete_absent_id_is_a_noop() {
        let mut store = CatalogStore::with_seed();
        store.delete(BookId(999));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = CatalogStore::with_seed();
        let id = store.books()[0].id;
        let before: Vec<Book> = store.books().to_vec();

        store.toggle_issued(id);
        assert!(store.get(id).unwrap().is_issued);
        // Everything but the flag is untouched.
        assert_eq!(store.books()[1..], before[1..]);

        store.toggle_issued(id);
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn toggle_absent_id_is_a_noop() {
        let mut store = CatalogStore::with_seed();
        let before: Vec<Book> = store.books().to_vec();
        store.toggle_issued(BookId(999));
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn filter_is_case_insensitive_over_title_and_author() {
        let store = CatalogStore::with_seed();

        let by_title: Vec<&str> = store.filter("gatsby").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(by_title, ["The Great Gatsby"]);

        let by_author: Vec<&str> = store.filter("ORWELL").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(by_author, ["1984"]);
    }

    #[test]
    fn filter_empty_query_returns_everything_in_order() {
        let store = CatalogStore::with_seed();
        let all: Vec<&str> = store.filter("").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            all,
            ["The Great Gatsby", "Clean Code", "1984", "Design Patterns"]
        );
    }

    #[test]
    fn filter_preserves_collection_order() {
        let mut store = CatalogStore::with_seed();
        store.add("Clean Architecture", "Robert C. Martin", "");

        let matches: Vec<&str> = store.filter("martin").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(matches, ["Clean Architecture", "Clean Code"]);
    }

    #[test]
    fn filter_has_no_side_effects() {
        let store = CatalogStore::with_seed();
        let first = store.filter("code").len();
        let second = store.filter("code").len();
        assert_eq!(first, second);
        assert_eq!(store.len(), 4);
    }
}
