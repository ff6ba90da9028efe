use anyhow::Result;
use todo_core::models::NewTodoData;
use todo_core::repository::TodoRepository;

use crate::cli::AddCommand;
use crate::commands::Outcome;

pub fn add_todo(repo: &mut impl TodoRepository, command: AddCommand) -> Result<Outcome> {
    let data = NewTodoData {
        text: command.text.join(" "),
        priority: command.priority,
        due: command.due,
    };

    let id = repo.add_todo(data)?;
    println!("Added todo {id}");
    Ok(Outcome::Success)
}
