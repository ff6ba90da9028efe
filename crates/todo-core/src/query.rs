use chrono::NaiveDateTime;

use crate::date::parse_iso;
use crate::models::Todo;

/// Criteria for listing todos. Every set criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    /// Include completed todos.
    pub show_all: bool,
    /// Case-insensitive substring of the text.
    pub query: Option<String>,
    /// Exact priority.
    pub priority: Option<i64>,
    /// Inclusive due-date cutoff. Ignored when it does not parse.
    pub due_before: Option<String>,
}

impl TodoFilter {
    pub fn all() -> Self {
        Self {
            show_all: true,
            ..Default::default()
        }
    }

    /// Resolves the textual criteria once so matching stays a plain scan.
    pub fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            show_all: self.show_all,
            needle: self
                .query
                .as_deref()
                .filter(|q| !q.is_empty())
                .map(str::to_lowercase),
            priority: self.priority,
            cutoff: self.due_before.as_deref().and_then(parse_iso),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledFilter {
    show_all: bool,
    needle: Option<String>,
    priority: Option<i64>,
    cutoff: Option<NaiveDateTime>,
}

impl CompiledFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(needle) = &self.needle {
            if !todo.text.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if todo.priority != Some(priority) {
                return false;
            }
        }
        if let Some(cutoff) = self.cutoff {
            match todo.due.as_deref().and_then(parse_iso) {
                Some(due) if due <= cutoff => {}
                _ => return false,
            }
        }
        self.show_all || !todo.done
    }
}
