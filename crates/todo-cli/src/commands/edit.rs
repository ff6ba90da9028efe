use anyhow::Result;
use todo_core::models::UpdateTodoData;
use todo_core::repository::TodoRepository;

use crate::cli::EditCommand;
use crate::commands::Outcome;

pub fn edit_todo(repo: &mut impl TodoRepository, command: EditCommand) -> Result<Outcome> {
    let id = command.id;
    let found = repo.update_todo(id, update_from_command(command))?;
    if found {
        println!("Edited {id}");
    }
    Ok(Outcome::from_found(found, id))
}

fn update_from_command(command: EditCommand) -> UpdateTodoData {
    let text = command
        .text
        .map(|words| words.join(" "))
        .filter(|t| !t.is_empty());

    let priority = if command.clear_priority {
        Some(None)
    } else {
        command.priority.map(Some)
    };

    // An empty --due means "leave as is"; only --clear-due removes it.
    let due = if command.clear_due {
        Some(None)
    } else {
        command.due.filter(|d| !d.is_empty()).map(Some)
    };

    UpdateTodoData { text, priority, due }
}
