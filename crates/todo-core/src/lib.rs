//! # Todo Core Library
//!
//! Storage for a small todo list kept in a single JSON file.
//!
//! ## Core Modules
//!
//! - [`models`]: The `Todo` record, the on-disk `Document`, and change sets
//! - [`repository`]: The `TodoRepository` trait and its JSON-file implementation
//! - [`document`]: Loading and atomically rewriting the data file
//! - [`query`]: List filters (text, priority, due-date cutoff, completion)
//! - [`date`]: ISO-8601 parsing for due dates
//! - [`error`]: Error type shared by all storage operations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use todo_core::{
//!     models::NewTodoData,
//!     query::TodoFilter,
//!     repository::{JsonRepository, TodoRepository},
//! };
//!
//! fn main() -> Result<(), todo_core::error::CoreError> {
//!     let mut repo = JsonRepository::open("todos.json")?;
//!
//!     let id = repo.add_todo(NewTodoData {
//!         text: "pay bills".to_string(),
//!         priority: Some(1),
//!         due: Some("2026-01-20".to_string()),
//!     })?;
//!     repo.complete_todo(id)?;
//!
//!     for todo in repo.find_todos(&TodoFilter::all()) {
//!         println!("{}: {}", todo.id, todo.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod document;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
