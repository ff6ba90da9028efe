use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single task record as stored in the data file.
///
/// Only `id` is strict. The other fields are read leniently so a hand-edited
/// record with an odd value does not make the whole file unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_done")]
    pub done: bool,
    /// Lower value means more urgent.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<i64>,
    /// ISO-8601 date string, kept exactly as entered.
    #[serde(default, deserialize_with = "lenient_due")]
    pub due: Option<String>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Truthiness: `null`, `0`, `""`, `[]` and `{}` read as not done.
fn lenient_done<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_due<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// The whole content of the data file: `{ "todos": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl Document {
    /// Next free id: one past the current maximum, starting at 1.
    ///
    /// `None` once the maximum id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn find(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoData {
    pub text: String,
    pub priority: Option<i64>,
    pub due: Option<String>,
}

/// Field-level changes for an existing todo.
///
/// `None` leaves a field untouched. For the nullable fields, `Some(None)`
/// clears the value and `Some(Some(v))` replaces it. Empty strings for `text`
/// and `due` are treated as "no change".
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoData {
    pub text: Option<String>,
    pub priority: Option<Option<i64>>,
    pub due: Option<Option<String>>,
}

impl UpdateTodoData {
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
            && self.priority.is_none()
            && self
                .due
                .as_ref()
                .map_or(true, |d| matches!(d.as_deref(), Some("")))
    }

    /// Applies the change set to `todo` in place.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(text) = self.text.filter(|t| !t.is_empty()) {
            todo.text = text;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        match self.due {
            Some(Some(due)) if due.is_empty() => {}
            Some(due) => todo.due = due,
            None => {}
        }
    }
}
