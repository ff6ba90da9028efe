use anyhow::Result;
use todo_core::repository::TodoRepository;

use crate::cli::DoneCommand;
use crate::commands::Outcome;

pub fn done_todo(repo: &mut impl TodoRepository, command: DoneCommand) -> Result<Outcome> {
    let found = repo.complete_todo(command.id)?;
    if found {
        println!("Marked {} done", command.id);
    }
    Ok(Outcome::from_found(found, command.id))
}
