use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the address book snapshot.
///
/// The book is always loaded and saved whole; there are no partial or
/// incremental writes. Implementations decide where the snapshot lives
/// (a file in production, memory in tests).
pub trait BookRepository {
    /// Load the saved book. A missing snapshot yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
