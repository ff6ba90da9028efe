use anyhow::Result;
use todo_core::repository::TodoRepository;

use crate::cli::RemoveCommand;
use crate::commands::Outcome;

pub fn remove_todo(repo: &mut impl TodoRepository, command: RemoveCommand) -> Result<Outcome> {
    let found = repo.delete_todo(command.id)?;
    if found {
        println!("Removed {}", command.id);
    }
    Ok(Outcome::from_found(found, command.id))
}
