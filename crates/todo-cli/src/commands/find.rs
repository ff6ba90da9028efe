use anyhow::Result;
use todo_core::query::TodoFilter;
use todo_core::repository::TodoRepository;

use crate::cli::FindCommand;
use crate::commands::Outcome;
use crate::views::line::display_todos;

/// Searches every todo, completed ones included.
pub fn find_todos(repo: &impl TodoRepository, command: FindCommand) -> Result<Outcome> {
    let filter = TodoFilter {
        query: Some(command.query.join(" ")),
        ..TodoFilter::all()
    };

    let todos = repo.find_todos(&filter);
    display_todos(&todos, "No todos found.");
    Ok(Outcome::Success)
}
