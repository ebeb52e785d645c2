//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod list_repo;


pub use traits::ListRepository;
pub use db::{init_db, DbState};
pub use list_repo::SqliteListRepository;
