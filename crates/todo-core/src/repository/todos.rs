use tracing::{debug, info};

use crate::error::CoreError;
use crate::models::{NewTodoData, Todo, UpdateTodoData};
use crate::query::TodoFilter;
use crate::repository::JsonRepository;

impl super::TodoRepository for JsonRepository {
    fn add_todo(&mut self, data: NewTodoData) -> Result<u64, CoreError> {
        let id = self.document().next_id().ok_or_else(|| {
            CoreError::InvalidInput(format!("No ids left after {}.", u64::MAX))
        })?;
        self.document_mut().todos.push(Todo {
            id,
            text: data.text,
            done: false,
            priority: data.priority,
            due: data.due.filter(|d| !d.is_empty()),
        });
        self.save()?;

        info!(id, "added todo");
        Ok(id)
    }

    fn find_todo_by_id(&self, id: u64) -> Option<&Todo> {
        self.document().find(id)
    }

    fn find_todos(&self, filter: &TodoFilter) -> Vec<Todo> {
        let compiled = filter.compile();
        let todos: Vec<Todo> = self
            .document()
            .todos
            .iter()
            .filter(|t| compiled.matches(t))
            .cloned()
            .collect();

        debug!(?filter, matched = todos.len(), "listed todos");
        todos
    }

    fn update_todo(&mut self, id: u64, data: UpdateTodoData) -> Result<bool, CoreError> {
        if data.is_empty() {
            debug!(id, "edit supplied no changes");
        }

        let Some(todo) = self.document_mut().find_mut(id) else {
            debug!(id, "edit target not found");
            return Ok(false);
        };
        data.apply_to(todo);
        self.save()?;

        info!(id, "edited todo");
        Ok(true)
    }

    fn complete_todo(&mut self, id: u64) -> Result<bool, CoreError> {
        let Some(todo) = self.document_mut().find_mut(id) else {
            debug!(id, "complete target not found");
            return Ok(false);
        };
        todo.done = true;
        self.save()?;

        info!(id, "completed todo");
        Ok(true)
    }

    fn delete_todo(&mut self, id: u64) -> Result<bool, CoreError> {
        let todos = &mut self.document_mut().todos;
        let Some(index) = todos.iter().position(|t| t.id == id) else {
            debug!(id, "remove target not found");
            return Ok(false);
        };
        todos.remove(index);
        self.save()?;

        info!(id, "removed todo");
        Ok(true)
    }
}
