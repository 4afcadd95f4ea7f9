//! End-to-end catalog scenarios against the demonstration seed

use libman::catalog::{BookId, CatalogStore};
use pretty_assertions::assert_eq;

fn id_of(store: &CatalogStore, title: &str) -> BookId {
    store
        .books()
        .iter()
        .find(|b| b.title == title)
        .map(|b| b.id)
        .unwrap_or_else(|| panic!("seed should contain {title}"))
}

#[test]
fn seed_contains_the_four_demonstration_records() {
    let store = CatalogStore::with_seed();
    assert_eq!(store.len(), 4);

    let titles: Vec<&str> = store.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        ["The Great Gatsby", "Clean Code", "1984", "Design Patterns"]
    );

    // Clean Code starts checked out, everything else is available
    let issued: Vec<bool> = store.books().iter().map(|b| b.is_issued).collect();
    assert_eq!(issued, [false, true, false, false]);
}

#[test]
fn searching_the_seed_for_1984_finds_exactly_orwell() {
    let store = CatalogStore::with_seed();

    let matches = store.filter("1984");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "1984");
    assert_eq!(matches[0].author, "George Orwell");
    assert!(!matches[0].is_issued);
}

#[test]
fn adding_dune_puts_it_first_and_available() {
    let mut store = CatalogStore::with_seed();
    store.add("Dune", "Frank Herbert", "");

    let all = store.filter("");
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].title, "Dune");
    assert_eq!(all[0].author, "Frank Herbert");
    assert_eq!(all[0].isbn, "");
    assert!(!all[0].is_issued);
}

#[test]
fn issuing_and_returning_gatsby_round_trips_its_status() {
    let mut store = CatalogStore::with_seed();
    let gatsby = id_of(&store, "The Great Gatsby");
    assert!(store.get(gatsby).unwrap().is_available());

    store.toggle_issued(gatsby);
    assert!(store.get(gatsby).unwrap().is_issued);

    store.toggle_issued(gatsby);
    assert!(store.get(gatsby).unwrap().is_available());

    // The other three records never moved or changed
    let titles: Vec<&str> = store.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        ["The Great Gatsby", "Clean Code", "1984", "Design Patterns"]
    );
    assert!(store.get(id_of(&store, "Clean Code")).unwrap().is_issued);
}

#[test]
fn deleting_clean_code_removes_it_from_every_view() {
    let mut store = CatalogStore::with_seed();
    let clean_code = id_of(&store, "Clean Code");

    store.delete(clean_code);
    assert_eq!(store.len(), 3);
    assert!(store.filter("Clean Code").is_empty());
    assert_eq!(store.get(clean_code), None);
}

#[test]
fn ids_stay_unique_across_adds_and_deletes() {
    let mut store = CatalogStore::with_seed();

    let a = store.add("A", "x", "").unwrap();
    store.delete(a);
    let b = store.add("B", "y", "").unwrap();
    let c = store.add("C", "z", "").unwrap();

    assert_ne!(a, b);
    assert_ne!(b, c);

    let mut ids: Vec<BookId> = store.books().iter().map(|book| book.id).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn whitespace_only_title_is_accepted_and_kept_verbatim() {
    // Only a truly empty title or author is rejected; whitespace counts
    // as present and fields are stored exactly as entered.
    let mut store = CatalogStore::with_seed();

    let id = store.add("  ", "Frank Herbert", "").expect("whitespace title is accepted");
    assert_eq!(store.len(), 5);
    assert_eq!(store.get(id).unwrap().title, "  ");

    let id = store.add(" Dune ", "Frank Herbert", "").unwrap();
    assert_eq!(store.get(id).unwrap().title, " Dune ");
}

#[test]
fn rejected_add_changes_nothing() {
    let mut store = CatalogStore::with_seed();
    let before: Vec<_> = store.books().to_vec();

    assert_eq!(store.add("", "Frank Herbert", "123"), None);
    assert_eq!(store.add("Dune", "", "123"), None);

    assert_eq!(store.books(), before.as_slice());
}
