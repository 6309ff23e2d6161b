//! Repository implementations.

mod sqlite_page_repository;

pub use sqlite_page_repository::SqlitePageRepository;
