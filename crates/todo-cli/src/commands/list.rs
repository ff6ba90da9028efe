use anyhow::Result;
use todo_core::query::TodoFilter;
use todo_core::repository::TodoRepository;

use crate::cli::ListCommand;
use crate::commands::Outcome;
use crate::views::line::display_todos;

pub fn list_todos(repo: &impl TodoRepository, command: ListCommand) -> Result<Outcome> {
    let filter = TodoFilter {
        show_all: command.all,
        query: command.query,
        priority: command.priority,
        due_before: command.due_before,
    };

    let todos = repo.find_todos(&filter);
    display_todos(&todos, "No todos.");
    Ok(Outcome::Success)
}
