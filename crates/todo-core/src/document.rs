use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::models::Document;

/// Loads the document at `path`.
///
/// A missing file, content that is not JSON, or JSON that is not shaped like
/// `{ "todos": [...] }` is replaced with an empty document, which is written
/// back before returning. A well-shaped file with a record whose `id` is
/// unusable is left untouched and reported as `CoreError::Json`. Other I/O
/// errors are propagated.
pub fn open_document(path: &Path) -> Result<Document, CoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "data file missing, starting empty");
            return reset(path);
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            info!(path = %path.display(), "data file is not valid UTF-8, starting empty");
            return reset(path);
        }
        Err(e) => return Err(e.into()),
    };

    let value = match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value,
        Err(e) => {
            info!(path = %path.display(), error = %e, "data file is not JSON, starting empty");
            return reset(path);
        }
    };

    if !has_document_shape(&value) {
        info!(path = %path.display(), "data file is not a todo document, starting empty");
        return reset(path);
    }

    let document: Document = serde_json::from_value(value)?;
    debug!(path = %path.display(), count = document.todos.len(), "loaded todos");
    Ok(document)
}

/// An object whose `todos` key, if present, holds an array.
fn has_document_shape(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.get("todos").map_or(true, Value::is_array),
        _ => false,
    }
}

fn reset(path: &Path) -> Result<Document, CoreError> {
    let document = Document::default();
    write_document(path, &document)?;
    Ok(document)
}

/// Writes the whole document to `path`, replacing any previous content.
///
/// The JSON goes to a temp file in the same directory and is then renamed
/// into place, so readers never observe a half-written file. The temp file is
/// removed if any step fails.
pub fn write_document(path: &Path, document: &Document) -> Result<(), CoreError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
            parent
        }
        None => Path::new("."),
    };

    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), count = document.todos.len(), "saved todos");
    Ok(())
}
