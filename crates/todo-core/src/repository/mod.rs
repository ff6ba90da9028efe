use std::path::{Path, PathBuf};

use crate::document::{open_document, write_document};
use crate::error::CoreError;
use crate::models::{Document, NewTodoData, Todo, UpdateTodoData};
use crate::query::TodoFilter;

pub mod todos;

/// Storage operations over the todo list.
///
/// Mutations return `Ok(false)` when the id does not exist; an `Err` always
/// means the data file could not be read or written.
pub trait TodoRepository {
    fn add_todo(&mut self, data: NewTodoData) -> Result<u64, CoreError>;
    fn find_todo_by_id(&self, id: u64) -> Option<&Todo>;
    fn find_todos(&self, filter: &TodoFilter) -> Vec<Todo>;
    fn update_todo(&mut self, id: u64, data: UpdateTodoData) -> Result<bool, CoreError>;
    fn complete_todo(&mut self, id: u64) -> Result<bool, CoreError>;
    fn delete_todo(&mut self, id: u64) -> Result<bool, CoreError>;
}

/// Repository backed by a single JSON file.
///
/// The whole document is read when the repository is opened and rewritten
/// after every successful mutation.
#[derive(Debug)]
pub struct JsonRepository {
    path: PathBuf,
    document: Document,
}

impl JsonRepository {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let document = open_document(&path)?;
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub(crate) fn save(&self) -> Result<(), CoreError> {
        write_document(&self.path, &self.document)
    }
}
