use std::process::ExitCode;

pub mod add;
pub mod done;
pub mod edit;
pub mod find;
pub mod list;
pub mod remove;

/// Exit code for a mutation that targeted an unknown id.
pub const NOT_FOUND_EXIT_CODE: u8 = 2;

/// Result of a command that ran without a storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
}

impl Outcome {
    pub fn from_found(found: bool, id: u64) -> Self {
        if found {
            Outcome::Success
        } else {
            println!("Todo {id} not found");
            Outcome::NotFound
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(NOT_FOUND_EXIT_CODE),
        }
    }
}
