use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Simple CLI todo manager
#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON data file (overrides TODO_FILE and todo.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new todo
    Add(AddCommand),
    /// List todos
    List(ListCommand),
    /// Mark todo as done
    Done(DoneCommand),
    /// Remove a todo
    Remove(RemoveCommand),
    /// Edit a todo
    Edit(EditCommand),
    /// Find todos by text
    Find(FindCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Text for the todo
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Priority (lower = higher priority)
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Show all todos (including done)
    #[arg(long)]
    pub all: bool,
    /// Filter by priority
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,
    /// Show todos due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_before: Option<String>,
    /// Filter todos by text substring
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// ID of todo to mark done
    pub id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveCommand {
    /// ID of todo to remove
    pub id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// ID of todo to edit
    pub id: u64,

    /// New text for the todo
    #[arg(long, num_args = 1..)]
    pub text: Option<Vec<String>>,

    /// New priority
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,
    /// Remove the priority
    #[arg(long, conflicts_with = "priority")]
    pub clear_priority: bool,

    /// New due date (YYYY-MM-DD); empty leaves it unchanged
    #[arg(long)]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct FindCommand {
    /// Search query string
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}
