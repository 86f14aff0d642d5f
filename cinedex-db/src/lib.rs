//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, the store handle, CRUD operations, and query
//! APIs backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{OperationError, add_movie, delete_movies, insert_movies, modify_movie};
pub use queries::{
    count_movies, find_first_movie, find_movie, list_movies, movies_matching, search_movies,
};
pub use schema::{ConnectionError, ensure_schema, open_database, open_memory};
pub use store::MovieStore;
