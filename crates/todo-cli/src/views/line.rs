use todo_core::models::Todo;

/// One-line summary: `[x] 3: text prio=1 due=2026-01-20`.
pub fn format_todo(todo: &Todo) -> String {
    let status = if todo.done { "x" } else { " " };
    let mut line = format!("[{}] {}: {}", status, todo.id, todo.text);

    if let Some(priority) = todo.priority {
        line.push_str(&format!(" prio={priority}"));
    }
    if let Some(due) = todo.due.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" due={due}"));
    }
    line
}

pub fn display_todos(todos: &[Todo], empty_message: &str) {
    if todos.is_empty() {
        println!("{empty_message}");
        return;
    }

    for todo in todos {
        println!("{}", format_todo(todo));
    }
}
