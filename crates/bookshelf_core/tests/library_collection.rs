use bookshelf_core::{BookInfo, InMemoryBookRepository, LibraryCollection, RepoError};
use std::collections::HashSet;
use uuid::Uuid;

fn info(title: &str, author: &str) -> BookInfo {
    BookInfo {
        title: title.to_string(),
        author: author.to_string(),
    }
}

#[test]
fn add_book_returns_fresh_id() {
    let mut library = LibraryCollection::new();

    let id = library.add_book("The Hobbit", "J.R.R. Tolkien").unwrap();

    assert!(!id.is_nil());
    assert_eq!(library.get_books_count(), 1);
}

#[test]
fn add_book_rejects_existing_title() {
    let mut library = LibraryCollection::new();
    library.add_book("The Hobbit", "Tolkien").unwrap();

    let err = library.add_book("The Hobbit", "Tolkien").unwrap_err();

    assert_eq!(err, RepoError::DuplicateTitle("The Hobbit".to_string()));
    assert_eq!(library.get_books_count(), 1);
}

#[test]
fn duplicate_title_with_other_author_is_still_rejected() {
    let mut library = LibraryCollection::new();
    let original = library.add_book("Book 2", "Author 2").unwrap();

    let err = library.add_book("Book 2", "Author 3").unwrap_err();

    assert!(matches!(err, RepoError::DuplicateTitle(_)));
    assert_eq!(library.get_book_info(original), Some(info("Book 2", "Author 2")));
}

#[test]
fn same_author_may_own_many_books() {
    let mut library = LibraryCollection::new();
    library.add_book("Emma", "Jane Austen").unwrap();
    library.add_book("Persuasion", "Jane Austen").unwrap();

    assert_eq!(library.get_books_count(), 2);
}

#[test]
fn empty_title_is_accepted_once() {
    let mut library = LibraryCollection::new();

    library.add_book("", "anonymous").unwrap();
    assert!(library.add_book("", "someone").is_err());
    assert_eq!(library.get_books_count(), 1);
}

#[test]
fn issued_ids_are_distinct() {
    let mut library = LibraryCollection::new();

    let ids: HashSet<_> = (0..50)
        .map(|n| library.add_book(format!("Book {n}"), "Author").unwrap())
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(library.get_books_count(), 50);
}

#[test]
fn remove_book_by_id() {
    let mut library = LibraryCollection::new();
    let id = library.add_book("The Hobbit", "J.R.R. Tolkien").unwrap();
    assert_eq!(library.get_books_count(), 1);

    library.remove_book(id);

    assert_eq!(library.get_books_count(), 0);
    assert!(library.get_book_info(id).is_none());
    assert!(library.is_empty());
}

#[test]
fn remove_book_is_idempotent_and_ignores_unknown_ids() {
    let mut library = LibraryCollection::new();
    let keep = library.add_book("A", "x").unwrap();
    let gone = library.add_book("B", "x").unwrap();

    library.remove_book(gone);
    library.remove_book(gone);
    library.remove_book(Uuid::new_v4());

    assert_eq!(library.get_books_count(), 1);
    assert_eq!(library.get_book_info(keep), Some(info("A", "x")));
}

#[test]
fn get_book_info_returns_title_and_author() {
    let mut library = LibraryCollection::new();
    let id = library.add_book("The Hobbit", "J.R.R. Tolkien").unwrap();

    assert_eq!(
        library.get_book_info(id),
        Some(info("The Hobbit", "J.R.R. Tolkien"))
    );
}

#[test]
fn fresh_collection_is_empty_and_lookups_return_none() {
    let library = LibraryCollection::new();

    assert_eq!(library.get_books_count(), 0);
    assert!(library.is_empty());
    assert!(library.get_all_books().is_empty());
    assert!(library.get_book_info(Uuid::new_v4()).is_none());
    assert!(library.get_book_info(Uuid::nil()).is_none());
}

#[test]
fn get_all_books_preserves_insertion_order() {
    let mut library = LibraryCollection::new();
    let id1 = library.add_book("The Hobbit", "J.R.R. Tolkien").unwrap();
    let id2 = library.add_book("1984", "George Orwell").unwrap();

    let all = library.get_all_books();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, id1);
    assert_eq!(all[0].title, "The Hobbit");
    assert_eq!(all[0].author, "J.R.R. Tolkien");
    assert_eq!(all[1].id, id2);
    assert_eq!(all[1].title, "1984");
    assert_eq!(all[1].author, "George Orwell");
}

#[test]
fn get_all_books_returns_a_snapshot() {
    let mut library = LibraryCollection::new();
    let id = library.add_book("A", "x").unwrap();

    let snapshot = library.get_all_books();
    library.remove_book(id);
    library.add_book("B", "y").unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, id);
    assert_eq!(snapshot[0].title, "A");
}

#[test]
fn count_tracks_adds_and_matches_enumeration() {
    let mut library = LibraryCollection::new();
    assert_eq!(library.get_books_count(), 0);

    library.add_book("The Hobbit", "J.R.R. Tolkien").unwrap();
    assert_eq!(library.get_books_count(), 1);

    library.add_book("1984", "George Orwell").unwrap();
    assert_eq!(library.get_books_count(), 2);
    assert_eq!(library.get_all_books().len(), library.get_books_count());
}

#[test]
fn multiple_operations_keep_invariants() {
    let mut library = LibraryCollection::new();
    let id1 = library.add_book("Book 1", "Author 1").unwrap();
    let id2 = library.add_book("Book 2", "Author 2").unwrap();
    assert_eq!(library.get_books_count(), 2);

    library.remove_book(id1);
    assert_eq!(library.get_books_count(), 1);
    assert_eq!(library.get_book_info(id2), Some(info("Book 2", "Author 2")));

    assert!(library.add_book("Book 2", "Author 3").is_err());
    assert_eq!(library.get_all_books().len(), 1);
}

#[test]
fn removed_title_can_be_added_again_with_new_id() {
    let mut library = LibraryCollection::new();
    let old = library.add_book("Dune", "Frank Herbert").unwrap();
    library.remove_book(old);

    let new = library.add_book("Dune", "Frank Herbert").unwrap();

    assert_ne!(old, new);
    assert!(library.get_book_info(old).is_none());
    assert_eq!(library.get_book_info(new), Some(info("Dune", "Frank Herbert")));
}

#[test]
fn order_after_removal_follows_remaining_insertions() {
    let mut library = LibraryCollection::new();
    let a = library.add_book("A", "x").unwrap();
    let b = library.add_book("B", "x").unwrap();
    let c = library.add_book("C", "x").unwrap();
    library.remove_book(a);
    let d = library.add_book("D", "x").unwrap();

    let ids: Vec<_> = library.get_all_books().into_iter().map(|book| book.id).collect();
    assert_eq!(ids, vec![b, c, d]);
}

#[test]
fn collection_accepts_explicit_repository() {
    let mut library = LibraryCollection::with_repository(InMemoryBookRepository::new());
    library.add_book("A", "x").unwrap();

    assert_eq!(library.get_books_count(), 1);
}
