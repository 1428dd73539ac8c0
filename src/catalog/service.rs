use tracing::{debug, info, warn};

use crate::model::Book;

/// In-memory library catalog.
///
/// Books are kept in insertion order. ISBN uniqueness is not enforced: adding
/// the same ISBN twice keeps both entries, lookups return the first one and
/// removal drops all of them.
#[derive(Debug, Clone, Default)]
pub struct BookService {
    books: Vec<Book>,
}

impl BookService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `book` unless its ISBN is blank.
    pub fn add_book(&mut self, book: Book) -> bool {
        if book.isbn.trim().is_empty() {
            warn!(title = %book.title, "Rejected book without ISBN");
            return false;
        }
        debug!(?book, "Add book");
        self.books.push(book);
        info!(size = self.books.len(), "Book added");
        true
    }

    /// Removes every entry with exactly this ISBN. Returns whether anything was removed.
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|book| book.isbn != isbn);
        let removed = self.books.len() != before;
        if removed {
            info!(isbn, size = self.books.len(), "Book removed");
        } else {
            debug!(isbn, "No book to remove");
        }
        removed
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// A copy of the catalog; changes to it do not reach the service.
    pub fn all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Sets availability on the first entry with this ISBN.
    pub fn update_book_availability(&mut self, isbn: &str, available: bool) -> bool {
        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => {
                book.available = available;
                info!(isbn, available, "Availability updated");
                true
            }
            None => {
                warn!(isbn, "Book not found");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
